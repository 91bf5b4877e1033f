// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter writes toward whatever draws the widget.
//!
//! Widgets know nothing about materials or shaders. Each frame they write a
//! handful of named scalars and vectors into a [`ParameterSink`]; the host maps
//! those names onto its own material system.

use glam::Vec4;

/// Apex position of the elastic surface, `(x, y, z, 0)`.
pub const CURSOR_POSITION: &str = "cursor_position";
/// Deformation falloff; halved while activated so the press looks deeper.
pub const FALLOFF: &str = "falloff";
/// Discrete state id, see [`SurfaceState::render_id`](crate::SurfaceState::render_id).
pub const INTERACTION_STATE: &str = "interaction_state";
/// Press depth at which the surface activates.
pub const INTERACTION_THRESHOLD: &str = "interaction_threshold";
/// Idle state color.
pub const IDLE_COLOR: &str = "idle_color";
/// Hovering state color.
pub const HOVERING_COLOR: &str = "hovering_color";
/// Activated state color.
pub const ACTIVATED_COLOR: &str = "activated_color";
/// Aspect-corrected surface scale, `(x, z, 0, 0)`.
pub const SURFACE_SCALE: &str = "surface_scale";
/// Icon scale within the surface.
pub const ICON_SCALE: &str = "icon_scale";

/// Receiver of named render parameters.
pub trait ParameterSink {
    /// Writes a scalar.
    fn set_float(&mut self, key: &'static str, value: f32);
    /// Writes an integer.
    fn set_int(&mut self, key: &'static str, value: i32);
    /// Writes a four-component vector or color.
    fn set_vector(&mut self, key: &'static str, value: Vec4);
}

/// Discards every write; for hosts that do not render a widget.
impl ParameterSink for () {
    fn set_float(&mut self, _: &'static str, _: f32) {}
    fn set_int(&mut self, _: &'static str, _: i32) {}
    fn set_vector(&mut self, _: &'static str, _: Vec4) {}
}
