// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grab handle that carries a [`Menu`] around.
//!
//! [`MenuDrag`] plugs into an [`InteractionVolume`] sitting on the menu's
//! handle bar:
//!
//! - hovering buzzes lightly and dents the handle toward the cursor;
//! - grabbing parents the menu to the cursor (optionally matching its
//!   orientation) and freezes any drift;
//! - letting go unparents the menu and, if it can drift, throws it with the
//!   controller's velocity when that velocity is fast enough.
//!
//! The handle moves with the menu; after each frame the host reads
//! [`MenuDrag::handle_pose`] back into the volume with
//! [`InteractionVolume::set_pose`].

use glam::{Affine3A, Vec3};
use vrui_interaction::render::ParameterSink;
use vrui_interaction::{
    ConfigError, Controller, InteractionVolume, VolumeBehavior, VolumeConfig, VolumeContext,
    VolumeState,
};

use crate::keys;
use crate::menu::Menu;

/// Pulse strength repeated every frame while hovering the handle.
pub const HOVER_PULSE: f32 = 0.25;
/// Pulse strength repeated every frame while carrying the menu.
pub const CARRY_PULSE: f32 = 0.45;
/// Controller speed, per second, above which a released menu keeps moving.
pub const THROW_THRESHOLD: f32 = 1.0;

/// Volume behavior that lets a cursor pick up and throw a [`Menu`].
#[derive(Clone, Debug, PartialEq)]
pub struct MenuDrag {
    menu: Menu,
    menu_from_handle: Affine3A,
    cursor_state: i32,
}

/// A volume driven by a [`MenuDrag`].
pub type MenuDragVolume<C> = InteractionVolume<MenuDrag, C>;

impl MenuDrag {
    /// Creates a handle placed at `menu_from_handle` in the menu's frame.
    #[must_use]
    pub fn new(menu: Menu, menu_from_handle: Affine3A) -> Self {
        Self {
            menu,
            menu_from_handle,
            cursor_state: 0,
        }
    }

    /// Wraps the handle in a volume already placed at the handle's pose.
    pub fn build<C: Controller>(
        self,
        config: VolumeConfig,
    ) -> Result<MenuDragVolume<C>, ConfigError> {
        let pose = self.handle_pose();
        let mut volume = InteractionVolume::new(config, self)?;
        volume.set_pose(pose);
        Ok(volume)
    }

    /// The carried menu.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Mutable access to the carried menu, e.g. for [`Menu::drift`].
    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    /// World pose of the handle, following the menu.
    #[must_use]
    pub fn handle_pose(&self) -> Affine3A {
        self.menu.pose() * self.menu_from_handle
    }

    /// `1` while the menu is being carried, `0` otherwise.
    #[must_use]
    pub fn cursor_state(&self) -> i32 {
        self.cursor_state
    }

    fn grab(&mut self, cx: &mut VolumeContext<'_>) {
        let cursor = cx.cursor_pose();
        let (scale, rotation, translation) = self.menu.pose().to_scale_rotation_translation();
        let rotation = if self.menu.config().snap_to_controller_orientation {
            cursor.rotation
        } else {
            rotation
        };
        let handle = Vec3::from(cx.volume_to_world().translation);
        let position = cursor.position + (translation - handle);
        self.menu
            .set_pose(Affine3A::from_scale_rotation_translation(scale, rotation, position));
        self.menu.attach(cursor);

        if let Some(body) = self.menu.body_mut() {
            body.freeze();
        }
        self.cursor_state = 1;
        tracing::debug!(cursor = ?cx.cursor(), "menu grabbed");
    }

    fn release(&mut self, cx: &mut VolumeContext<'_>) {
        let (velocity, angular_velocity) = cx
            .controller()
            .map_or((Vec3::ZERO, Vec3::ZERO), |c| (c.velocity(), c.angular_velocity()));

        if let Some(body) = self.menu.body_mut() {
            body.frozen = false;
            if velocity.length() > THROW_THRESHOLD {
                body.velocity = velocity;
            }
            if angular_velocity.length() > THROW_THRESHOLD {
                body.angular_velocity = angular_velocity;
            }
            tracing::debug!(velocity = ?body.velocity, "menu released");
        }
        self.cursor_state = 0;
        self.menu.detach();
    }

    fn track_cursor(cx: &mut VolumeContext<'_>, pulse: f32) {
        if let Some(controller) = cx.controller() {
            controller.trigger_haptic_pulse(pulse);
        }
        let local = cx.cursor_local();
        cx.physics().set_position(local);
    }
}

impl VolumeBehavior for MenuDrag {
    fn on_begin(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        if state == VolumeState::Activating {
            self.grab(cx);
        }
    }

    fn on_continuous(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        match state {
            VolumeState::Hovering => Self::track_cursor(cx, HOVER_PULSE),
            VolumeState::Activating => {
                Self::track_cursor(cx, CARRY_PULSE);
                self.menu.follow(cx.cursor_pose());
            }
            VolumeState::Idle => {}
        }
    }

    fn on_end(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        if state == VolumeState::Activating {
            self.release(cx);
        }
    }

    fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_int(keys::CURSOR_STATE, self.cursor_state);
    }
}

/// Moves a handle volume to follow its menu. Call once per frame after `update` and drifting.
pub fn sync_handle_pose<C: Controller>(volume: &mut MenuDragVolume<C>) {
    let pose = volume.behavior().handle_pose();
    volume.set_pose(pose);
}
