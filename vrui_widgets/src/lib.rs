// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VRUI Widgets: buttons, sliders and draggable menus.
//!
//! Each widget is a behavior plugged into one of the state machines from
//! `vrui_interaction`:
//!
//! - [`button::Button`] and [`slider::Slider`] drive an
//!   [`InteractionSurface`](vrui_interaction::InteractionSurface), pressed by
//!   pushing the cursor into it.
//! - [`menu_drag::MenuDrag`] drives an
//!   [`InteractionVolume`](vrui_interaction::InteractionVolume), grabbed with a
//!   controller button to carry a [`menu::Menu`].
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use vrui_interaction::{Contact, CursorId, Frame, NoController, SurfaceConfig};
//! use vrui_widgets::slider::{Slider, SliderRange, SliderSurface};
//!
//! let mut slider: SliderSurface<NoController> = Slider::new(SliderRange::new(0.0, 10.0))
//!     .build(SurfaceConfig::default())
//!     .unwrap();
//! assert_eq!(slider.value(), 5.0);
//!
//! // Press in, then slide all the way toward -X.
//! slider.on_trigger_enter(Contact::cursor(CursorId(1)), None);
//! slider.update(&Frame::with_cursor(0.011, Vec3::new(0.0, 0.4, 0.0)));
//! slider.update(&Frame::with_cursor(0.011, Vec3::new(-0.6, -0.2, 0.0)));
//! assert_eq!(slider.value(), 10.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for widget configuration.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod button;
pub mod keys;
pub mod menu;
pub mod menu_drag;
pub mod slider;
