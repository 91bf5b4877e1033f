// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Free-floating menus that can be carried around by a cursor and thrown.

use glam::{Affine3A, Quat, Vec3};

use vrui_interaction::CursorPose;

/// Linear drag of a drifting menu, per second.
pub const LINEAR_DRAG: f32 = 2.75;
/// Angular drag of a drifting menu, per second.
pub const ANGULAR_DRAG: f32 = 3.0;

/// How a menu behaves when grabbed and let go.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MenuConfig {
    /// Keep moving after being thrown, slowing down under drag.
    pub can_drift: bool,
    /// Take the cursor's orientation when grabbed.
    pub snap_to_controller_orientation: bool,
}

/// Gravity-free rigid body that slows a thrown menu to a stop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DriftBody {
    /// World-space velocity, meters per second.
    pub velocity: Vec3,
    /// World-space angular velocity, radians per second.
    pub angular_velocity: Vec3,
    /// Fraction of velocity lost per second.
    pub linear_drag: f32,
    /// Fraction of angular velocity lost per second.
    pub angular_drag: f32,
    /// A frozen body ignores its velocities; the menu is moved by hand.
    pub frozen: bool,
}

impl Default for DriftBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            linear_drag: LINEAR_DRAG,
            angular_drag: ANGULAR_DRAG,
            frozen: false,
        }
    }
}

impl DriftBody {
    /// Stops and freezes the body.
    pub fn freeze(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
        self.frozen = true;
    }

    /// Returns `true` if the body has nothing left to integrate.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.frozen || (self.velocity == Vec3::ZERO && self.angular_velocity == Vec3::ZERO)
    }
}

/// A menu's world pose, its optional drift body, and its link to a carrying cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct Menu {
    config: MenuConfig,
    pose: Affine3A,
    body: Option<DriftBody>,
    cursor_from_menu: Option<Affine3A>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(MenuConfig::default(), Affine3A::IDENTITY)
    }
}

impl Menu {
    /// Creates a menu at `pose`, with a drift body if the config allows drifting.
    #[must_use]
    pub fn new(config: MenuConfig, pose: Affine3A) -> Self {
        Self {
            config,
            pose,
            body: config.can_drift.then(DriftBody::default),
            cursor_from_menu: None,
        }
    }

    /// The menu's configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// World pose.
    #[must_use]
    pub fn pose(&self) -> Affine3A {
        self.pose
    }

    /// World position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.pose.translation.into()
    }

    /// Moves the menu.
    pub fn set_pose(&mut self, pose: Affine3A) {
        self.pose = pose;
    }

    /// The drift body, present when the menu can drift.
    #[must_use]
    pub fn body(&self) -> Option<&DriftBody> {
        self.body.as_ref()
    }

    /// Mutable access to the drift body.
    pub fn body_mut(&mut self) -> Option<&mut DriftBody> {
        self.body.as_mut()
    }

    /// Returns `true` while a cursor carries the menu.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.cursor_from_menu.is_some()
    }

    /// Parents the menu to a cursor, keeping its current world pose.
    pub fn attach(&mut self, cursor: CursorPose) {
        self.cursor_from_menu = Some(cursor.to_affine().inverse() * self.pose);
    }

    /// Moves an attached menu along with the cursor. Detached menus ignore this.
    pub fn follow(&mut self, cursor: CursorPose) {
        if let Some(offset) = self.cursor_from_menu {
            self.pose = cursor.to_affine() * offset;
        }
    }

    /// Unparents the menu, keeping its current world pose.
    pub fn detach(&mut self) {
        self.cursor_from_menu = None;
    }

    /// Integrates the drift body for one frame.
    pub fn drift(&mut self, dt: f32) {
        if self.is_attached() || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Some(body) = self.body.as_mut() else {
            return;
        };
        if body.is_still() {
            return;
        }

        let (scale, rotation, translation) = self.pose.to_scale_rotation_translation();
        let spin = Quat::from_scaled_axis(body.angular_velocity * dt);
        self.pose = Affine3A::from_scale_rotation_translation(
            scale,
            (spin * rotation).normalize(),
            translation + body.velocity * dt,
        );

        body.velocity *= (1.0 - body.linear_drag * dt).max(0.0);
        body.angular_velocity *= (1.0 - body.angular_drag * dt).max(0.0);
        if body.velocity.length_squared() < 1e-8 {
            body.velocity = Vec3::ZERO;
        }
        if body.angular_velocity.length_squared() < 1e-8 {
            body.angular_velocity = Vec3::ZERO;
        }
    }
}
