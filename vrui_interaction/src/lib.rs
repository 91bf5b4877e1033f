// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VRUI Interaction: per-frame state machines for spatial widgets.
//!
//! Spatial widgets are pressed by physically moving a tracked controller's
//! cursor into a trigger volume. This crate tracks what that cursor is doing
//! and turns it into lifecycle events, haptics and render parameters. It does
//! no collision detection and no rendering of its own; the host reports
//! trigger contacts and cursor poses, then reads state back.
//!
//! - [`InteractionSurface`]: a pressable face with four states (idle,
//!   hovering, activated, one-frame released), driven by press depth.
//! - [`InteractionVolume`]: a grabbable volume that hovers while a cursor is
//!   inside and activates while a controller button is held.
//! - [`controller`]: the small capability surface widgets need from a
//!   tracked controller.
//! - [`render`]: named parameters pushed to whatever draws the widget.
//!
//! Widgets plug their own policy into the state machines through
//! [`SurfaceBehavior`] and [`VolumeBehavior`]; applications subscribe to
//! [`Listeners`] per state and lifecycle point.
//!
//! ## Frame order
//!
//! For each widget, every frame:
//!
//! 1. deliver trigger enter/exit contacts,
//! 2. call `update` with the frame's cursor pose,
//! 3. push render parameters.
//!
//! Everything is single-threaded; widgets share no state with each other.
//!
//! ## Usage
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use glam::Vec3;
//! use vrui_interaction::{
//!     Contact, CursorId, Frame, InteractionSurface, NoController, SurfaceConfig, SurfaceState,
//! };
//!
//! let mut surface: InteractionSurface<(), NoController> =
//!     InteractionSurface::new(SurfaceConfig::default(), ()).unwrap();
//!
//! let presses = Rc::new(RefCell::new(0));
//! let counter = Rc::clone(&presses);
//! surface
//!     .state_data_mut(SurfaceState::Activated)
//!     .events
//!     .begin
//!     .add(move |_value| *counter.borrow_mut() += 1);
//!
//! surface.on_trigger_enter(Contact::cursor(CursorId(1)), None);
//! for y in [0.4, 0.2, -0.2, 0.1, -0.3] {
//!     surface.update(&Frame::with_cursor(1.0 / 90.0, Vec3::new(0.0, y, 0.0)));
//! }
//!
//! // Activation is held until the cursor leaves, so wobbling counts once.
//! assert_eq!(*presses.borrow(), 1);
//! ```
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for configuration types.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod controller;
pub mod render;

mod config;
mod error;
mod input;
mod listeners;
mod state;
mod surface;
mod trigger;
mod volume;

pub use config::{SurfaceConfig, VolumeConfig};
pub use controller::{Controller, NoController};
pub use error::ConfigError;
pub use input::{Contact, CursorId, CursorPose, Frame};
pub use listeners::Listeners;
pub use state::{Lifecycle, StateData, StateEvents, StateStyle, StateStyles, SurfaceState};
pub use surface::{InteractionSurface, SurfaceBehavior, SurfaceContext};
pub use trigger::TriggerBox;
pub use volume::{InteractionVolume, VolumeBehavior, VolumeContext, VolumeState};

pub use vrui_elastic::{ElasticConfig, ElasticError, ElasticSurface};
