// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! VRUI Elastic: a per-frame damped spring for tactile widget surfaces.
//!
//! Spatial widgets show how far they are pressed by deforming a single apex
//! point. While a cursor touches the widget the apex follows the cursor
//! exactly; once released it springs back to the origin and snaps to exact
//! rest instead of decaying forever.
//!
//! ```rust
//! use glam::Vec3;
//! use vrui_elastic::{ElasticConfig, ElasticSurface};
//!
//! let mut surface = ElasticSurface::new(ElasticConfig::new(2.0, 1.0)).unwrap();
//! surface.set_position(Vec3::new(0.2, -0.4, 0.0));
//!
//! let mut frames = 0;
//! while !surface.is_at_rest() {
//!     surface.simulate(1.0 / 90.0);
//!     frames += 1;
//! }
//! assert_eq!(surface.position(), Vec3::ZERO);
//! assert!(frames < 5_000);
//! ```
//!
//! The state never holds NaN or infinite components: anything non-finite is
//! written back as zero. Invalid tuning (for example a zero elasticity, which
//! would divide by zero) is rejected when the surface is built.
//!
//! ## Features
//!
//! - `std` (default): use the standard library for float math.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `serde`: derive `Serialize`/`Deserialize` for [`ElasticConfig`].
//!
//! This crate is `no_std` compatible.

#![no_std]

mod config;
mod error;
mod surface;

pub use config::ElasticConfig;
pub use error::ElasticError;
pub use surface::{ElasticSurface, REST_EPSILON};
