// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Error returned when an [`ElasticConfig`](crate::ElasticConfig) cannot drive a stable surface.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ElasticError {
    /// Elasticity divides the per-step velocity decay, so it must be finite and positive.
    #[error("elasticity must be finite and greater than zero, got {0}")]
    NonPositiveElasticity(f32),
    /// Damping scales the restoring pull and must be finite and non-negative.
    #[error("damping must be finite and non-negative, got {0}")]
    NegativeDamping(f32),
    /// One of the axis influence components is NaN or infinite.
    #[error("axis influence components must be finite")]
    NonFiniteAxisInfluence,
}
