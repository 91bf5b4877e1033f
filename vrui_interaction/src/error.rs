// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use vrui_elastic::ElasticError;

/// Error returned when a widget configuration is rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The elastic surface tuning is invalid.
    #[error("invalid elastic surface: {0}")]
    Elastic(#[from] ElasticError),
    /// The activation threshold must lie in `0.0..=1.0`.
    #[error("interaction threshold must be within 0..=1, got {0}")]
    ThresholdOutOfRange(f32),
    /// The trigger margin must be finite and non-negative.
    #[error("trigger margin must be finite and non-negative, got {0}")]
    NegativeTriggerMargin(f32),
    /// The surface falloff must be finite and non-negative.
    #[error("surface falloff must be finite and non-negative, got {0}")]
    FalloffOutOfRange(f32),
    /// The icon scale must lie in `0.0..=1.0`.
    #[error("icon scale must be within 0..=1, got {0}")]
    IconScaleOutOfRange(f32),
    /// One of the cursor axis influence components is NaN or infinite.
    #[error("cursor axis influence components must be finite")]
    NonFiniteCursorInfluence,
    /// The trigger box has a zero, negative, or non-finite extent.
    #[error("trigger box must have positive, finite extents")]
    InvalidTriggerSize,
}
