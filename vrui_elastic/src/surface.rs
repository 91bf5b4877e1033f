// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The elastic apex simulator.
//!
//! ## Usage
//!
//! 1) While a cursor is touching the widget, call [`ElasticSurface::set_position`]
//!    every frame with the cursor position in the surface's local frame.
//! 2) Once the widget is released, call [`ElasticSurface::simulate`] every frame
//!    and the apex springs back to the origin, snapping to exact rest.
//! 3) Read [`ElasticSurface::position`] to drive the visual deformation.
//!
//! ## Minimal example
//!
//! ```
//! use glam::Vec3;
//! use vrui_elastic::{ElasticConfig, ElasticSurface};
//!
//! let mut surface = ElasticSurface::new(ElasticConfig::new(2.0, 1.0)).unwrap();
//!
//! // Pushed in by a cursor.
//! surface.set_position(Vec3::new(0.0, -0.3, 0.0));
//!
//! // Released: one step pulls it back toward rest.
//! surface.simulate(1.0 / 90.0);
//! assert!(surface.position().y > -0.3);
//! assert!(surface.position().y < 0.0);
//! ```

use glam::Vec3;

use crate::{ElasticConfig, ElasticError};

/// Magnitude below which velocity and position snap to exact zero.
pub const REST_EPSILON: f32 = 0.01;

/// Fraction of the restoring pull applied per step, scaled by damping.
const PULL_SCALE: f32 = 0.1;

/// Fraction of the position bled off per step on influenced axes.
const POSITION_BLEED: f32 = 0.001;

/// A damped spring pulling a single apex point back to the local origin.
///
/// The step is frame-based: every call to [`simulate`](Self::simulate)
/// advances exactly one frame of motion, which keeps the settle animation
/// identical between hosts that feed variable and fixed delta times.
#[derive(Clone, Debug, PartialEq)]
pub struct ElasticSurface {
    config: ElasticConfig,
    decay: f32,
    apex_position: Vec3,
    apex_velocity: Vec3,
}

impl ElasticSurface {
    /// Creates a surface at rest.
    pub fn new(config: ElasticConfig) -> Result<Self, ElasticError> {
        config.validate()?;
        Ok(Self {
            decay: decay_factor(config.elasticity),
            config,
            apex_position: Vec3::ZERO,
            apex_velocity: Vec3::ZERO,
        })
    }

    /// Returns the configuration this surface was built with.
    #[must_use]
    pub fn config(&self) -> &ElasticConfig {
        &self.config
    }

    /// Replaces the axis mask; takes effect on the next step.
    pub fn set_axis_influence(&mut self, axis_influence: Vec3) -> Result<(), ElasticError> {
        let config = self.config.with_axis_influence(axis_influence);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Advances the free-running spring by one frame.
    ///
    /// `dt` is the host frame time. It is accepted so hosts can drive every
    /// per-frame component uniformly; the spring itself steps once per call.
    pub fn simulate(&mut self, dt: f32) {
        let _ = dt;
        let mask = self.config.axis_influence;

        let mut velocity =
            self.apex_velocity + -self.apex_position * (PULL_SCALE * self.config.damping);
        velocity *= self.decay;
        if velocity.length() < REST_EPSILON {
            velocity = Vec3::ZERO;
        }
        velocity *= mask;

        let mut position = self.apex_position + velocity;
        // Masked axes are left exactly where they were last set.
        position *= Vec3::ONE - mask * POSITION_BLEED;
        if position.length() < REST_EPSILON {
            position = Vec3::ZERO;
        }

        self.apex_velocity = finite_or_zero(velocity);
        self.apex_position = finite_or_zero(position);
    }

    /// Overrides the apex position; used while a cursor drives the surface.
    ///
    /// Non-finite components are stored as zero.
    pub fn set_position(&mut self, position: Vec3) {
        self.apex_position = finite_or_zero(position);
    }

    /// Returns the current apex position in the surface's local frame.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.apex_position
    }

    /// Returns the velocity carried into the next step.
    #[must_use]
    pub fn velocity(&self) -> Vec3 {
        self.apex_velocity
    }

    /// Returns `true` once both position and velocity have snapped to zero.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.apex_position == Vec3::ZERO && self.apex_velocity == Vec3::ZERO
    }

    /// Puts the apex back at rest immediately.
    pub fn reset(&mut self) {
        self.apex_position = Vec3::ZERO;
        self.apex_velocity = Vec3::ZERO;
    }
}

fn decay_factor(elasticity: f32) -> f32 {
    (1.0 - 1.0 / elasticity).min(1.0)
}

fn finite_or_zero(v: Vec3) -> Vec3 {
    if v.is_finite() {
        return v;
    }
    tracing::trace!(?v, "coercing non-finite elastic state to zero");
    let fix = |c: f32| if c.is_finite() { c } else { 0.0 };
    Vec3::new(fix(v.x), fix(v.y), fix(v.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(elasticity: f32, damping: f32) -> ElasticSurface {
        ElasticSurface::new(ElasticConfig::new(elasticity, damping)).unwrap()
    }

    #[test]
    fn new_surface_is_at_rest() {
        let s = surface(2.0, 1.0);
        assert!(s.is_at_rest());
        assert_eq!(s.position(), Vec3::ZERO);
    }

    #[test]
    fn invalid_config_is_rejected() {
        assert_eq!(
            ElasticSurface::new(ElasticConfig::new(0.0, 1.0)),
            Err(ElasticError::NonPositiveElasticity(0.0))
        );
    }

    #[test]
    fn first_step_matches_hand_computation() {
        let mut s = surface(2.0, 1.0);
        s.set_position(Vec3::X);
        s.simulate(0.0);

        // v = (0 - 1 * 0.1) * 0.5 = -0.05; p = (1 - 0.05) * 0.999
        assert_eq!(s.velocity(), Vec3::new(-0.05, 0.0, 0.0));
        assert!((s.position().x - 0.949_05).abs() < 1e-6);
    }

    #[test]
    fn small_velocity_snaps_to_zero() {
        let mut s = surface(2.0, 1.0);
        // Pull is 0.1 * 0.05 = 0.005, halved by decay: below the snap.
        s.set_position(Vec3::new(0.05, 0.0, 0.0));
        s.simulate(0.0);
        assert_eq!(s.velocity(), Vec3::ZERO);
    }

    #[test]
    fn small_position_snaps_to_zero() {
        let mut s = surface(2.0, 1.0);
        s.set_position(Vec3::new(0.005, 0.0, 0.0));
        s.simulate(0.0);
        assert!(s.is_at_rest());
    }

    #[test]
    fn set_position_coerces_nan() {
        let mut s = surface(2.0, 1.0);
        s.set_position(Vec3::new(f32::NAN, 0.5, f32::INFINITY));
        assert_eq!(s.position(), Vec3::new(0.0, 0.5, 0.0));
    }

    #[test]
    fn huge_position_never_produces_nan() {
        let mut s = surface(2.0, 1.0);
        s.set_position(Vec3::splat(f32::MAX));
        for _ in 0..8 {
            s.simulate(0.0);
            assert!(s.position().is_finite());
            assert!(s.velocity().is_finite());
        }
    }

    #[test]
    fn divergent_tuning_self_heals() {
        // 1 - 1/0.5 = -1: the spring pumps energy in every step until it overflows.
        let mut s = surface(0.5, 1.0);
        s.set_position(Vec3::new(0.5, 0.0, 0.0));
        for _ in 0..5_000 {
            s.simulate(0.0);
            assert!(s.position().is_finite());
        }
    }

    #[test]
    fn zero_damping_only_bleeds() {
        let mut s = surface(2.0, 0.0);
        s.set_position(Vec3::new(0.0, 0.0, 1.0));
        s.simulate(0.0);
        assert_eq!(s.velocity(), Vec3::ZERO);
        assert!((s.position().z - 0.999).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_rest() {
        let mut s = surface(2.0, 1.0);
        s.set_position(Vec3::ONE);
        s.simulate(0.0);
        s.reset();
        assert!(s.is_at_rest());
    }

    #[test]
    fn changing_axis_influence_validates() {
        let mut s = surface(2.0, 1.0);
        assert!(s.set_axis_influence(Vec3::new(1.0, 0.0, 1.0)).is_ok());
        assert_eq!(s.config().axis_influence, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            s.set_axis_influence(Vec3::NAN),
            Err(ElasticError::NonFiniteAxisInfluence)
        );
        assert_eq!(s.config().axis_influence, Vec3::new(1.0, 0.0, 1.0));
    }
}
