// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the host feeds the state machines: trigger contacts and per-frame cursor poses.

use glam::{Affine3A, Quat, Vec3};

/// Host-assigned identity of a cursor object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(pub u64);

/// An object overlapping (or leaving) a widget's trigger volume.
///
/// Collision layers report every overlapping collider. Only contacts marked
/// as cursors drive interaction; everything else is ignored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// The overlapping object.
    pub id: CursorId,
    /// Whether the object carries the cursor marker.
    pub is_cursor: bool,
    /// World pose of the object at the moment of contact, if the host knows it.
    ///
    /// Widgets that react on enter (a volume entered with its button held)
    /// read this pose instead of waiting for the next frame.
    pub pose: Option<CursorPose>,
}

impl Contact {
    /// A contact with a cursor object.
    #[must_use]
    pub fn cursor(id: CursorId) -> Self {
        Self {
            id,
            is_cursor: true,
            pose: None,
        }
    }

    /// A contact with something that is not a cursor.
    #[must_use]
    pub fn other(id: CursorId) -> Self {
        Self {
            id,
            is_cursor: false,
            pose: None,
        }
    }

    /// Attaches the object's world pose at the moment of contact.
    #[must_use]
    pub fn with_pose(self, pose: CursorPose) -> Self {
        Self {
            pose: Some(pose),
            ..self
        }
    }
}

/// World-space pose of a cursor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorPose {
    /// World-space position.
    pub position: Vec3,
    /// World-space orientation.
    pub rotation: Quat,
}

impl CursorPose {
    /// A pose at `position` with identity orientation.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Returns the cursor's local-to-world transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine3A {
        Affine3A::from_rotation_translation(self.rotation, self.position)
    }

    /// Replaces non-finite position components with zero and a non-finite
    /// rotation with identity.
    #[must_use]
    pub(crate) fn finite(self) -> Self {
        if self.position.is_finite() && self.rotation.is_finite() {
            return self;
        }
        tracing::trace!(pose = ?self, "coercing non-finite cursor pose");
        let rotation = if self.rotation.is_finite() {
            self.rotation
        } else {
            Quat::IDENTITY
        };
        Self {
            position: finite_or_zero(self.position),
            rotation,
        }
    }
}

/// Replaces non-finite components with zero.
pub(crate) fn finite_or_zero(v: Vec3) -> Vec3 {
    let fix = |c: f32| if c.is_finite() { c } else { 0.0 };
    Vec3::new(fix(v.x), fix(v.y), fix(v.z))
}

impl Default for CursorPose {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Per-frame input for one widget.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Pose of the cursor currently linked to the widget, if the host tracked it this frame.
    ///
    /// When `None` the widget keeps using the last pose it saw.
    pub cursor: Option<CursorPose>,
}

impl Frame {
    /// A frame without a fresh cursor pose.
    #[must_use]
    pub fn idle(dt: f32) -> Self {
        Self { dt, cursor: None }
    }

    /// A frame with the cursor at `position`.
    #[must_use]
    pub fn with_cursor(dt: f32, position: Vec3) -> Self {
        Self {
            dt,
            cursor: Some(CursorPose::at(position)),
        }
    }
}

/// A cursor currently overlapping a widget, plus the controller that owns it.
///
/// The widget never owns the cursor; the link is dropped on trigger exit.
#[derive(Clone, Debug)]
pub(crate) struct CursorLink<C> {
    pub(crate) id: CursorId,
    pub(crate) controller: Option<C>,
}
