// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for [`ElasticSurface`](crate::ElasticSurface).

use glam::Vec3;

use crate::ElasticError;

/// Tuning for an elastic surface.
///
/// The defaults give a soft surface that settles in well under a second at
/// 90 Hz: `elasticity = 2.0`, `damping = 1.0`, every axis influenced.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ElasticConfig {
    /// Decay-rate divisor: each step keeps `1 - 1/elasticity` of the velocity.
    pub elasticity: f32,
    /// Strength of the pull back toward the rest position.
    pub damping: f32,
    /// Per-axis mask, normally `0.0` or `1.0`, selecting which axes spring back.
    pub axis_influence: Vec3,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            elasticity: 2.0,
            damping: 1.0,
            axis_influence: Vec3::ONE,
        }
    }
}

impl ElasticConfig {
    /// Creates a config with the given elasticity and damping, influencing every axis.
    #[must_use]
    pub fn new(elasticity: f32, damping: f32) -> Self {
        Self {
            elasticity,
            damping,
            axis_influence: Vec3::ONE,
        }
    }

    /// Returns this config with a different axis mask.
    #[must_use]
    pub fn with_axis_influence(mut self, axis_influence: Vec3) -> Self {
        self.axis_influence = axis_influence;
        self
    }

    /// Checks that the config describes a surface whose step is well defined.
    ///
    /// A zero elasticity would divide by zero in the decay factor, so it is
    /// rejected here rather than left to poison the simulation.
    pub fn validate(&self) -> Result<(), ElasticError> {
        if !self.elasticity.is_finite() || self.elasticity <= 0.0 {
            return Err(ElasticError::NonPositiveElasticity(self.elasticity));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(ElasticError::NegativeDamping(self.damping));
        }
        if !self.axis_influence.is_finite() {
            return Err(ElasticError::NonFiniteAxisInfluence);
        }
        Ok(())
    }
}
