// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render parameter names written by the widgets, on top of
//! [`vrui_interaction::render`]'s.

/// Button kind id, see [`ButtonKind::render_id`](crate::button::ButtonKind::render_id).
pub const BUTTON_KIND: &str = "button_type";
/// Toggle latch, `0` or `1`.
pub const TOGGLE_STATE: &str = "toggle_state";
/// Slider track position in `0.0..=1.0`.
pub const SLIDER_AMOUNT: &str = "slider_amount";
/// `1` while a menu handle is carrying its menu.
pub const CURSOR_STATE: &str = "cursor_state";
