// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget configuration, validated once when a widget is built.

use glam::Vec3;
use vrui_elastic::ElasticConfig;

use crate::{ConfigError, StateStyles};

/// Configuration of an [`InteractionSurface`](crate::InteractionSurface).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SurfaceConfig {
    /// Press depth at which hovering becomes activated, in `0.0..=1.0`.
    pub interaction_threshold: f32,
    /// Extra trigger extent around the unit widget, so hovering starts before contact.
    pub trigger_margin: f32,
    /// Deformation falloff pushed to the renderer.
    pub surface_falloff: f32,
    /// Icon scale pushed to the renderer, in `0.0..=1.0`.
    pub icon_scale: f32,
    /// Per-axis multiplier applied to the cursor's local position; `0` locks an axis.
    pub cursor_axis_influence: Vec3,
    /// Feedback for each state.
    pub styles: StateStyles,
    /// Tuning of the surface spring.
    pub elastic: ElasticConfig,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            interaction_threshold: 0.5,
            trigger_margin: 0.2,
            surface_falloff: 0.9,
            icon_scale: 0.5,
            cursor_axis_influence: Vec3::ONE,
            styles: StateStyles::default(),
            elastic: ElasticConfig::default(),
        }
    }
}

impl SurfaceConfig {
    /// Checks every field, logging and returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().inspect_err(|err| {
            tracing::warn!(%err, "rejecting surface configuration");
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        self.elastic.validate()?;
        if !(0.0..=1.0).contains(&self.interaction_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(self.interaction_threshold));
        }
        if !self.trigger_margin.is_finite() || self.trigger_margin < 0.0 {
            return Err(ConfigError::NegativeTriggerMargin(self.trigger_margin));
        }
        if !self.surface_falloff.is_finite() || self.surface_falloff < 0.0 {
            return Err(ConfigError::FalloffOutOfRange(self.surface_falloff));
        }
        if !(0.0..=1.0).contains(&self.icon_scale) {
            return Err(ConfigError::IconScaleOutOfRange(self.icon_scale));
        }
        if !self.cursor_axis_influence.is_finite() {
            return Err(ConfigError::NonFiniteCursorInfluence);
        }
        Ok(())
    }
}

/// Configuration of an [`InteractionVolume`](crate::InteractionVolume).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolumeConfig {
    /// Device-specific button index that activates the volume while held.
    pub activation_button: u32,
    /// Tuning of the volume's spring.
    pub elastic: ElasticConfig,
}

impl VolumeConfig {
    /// Bit of the trigger button in OpenVR-style button masks.
    pub const TRIGGER_BUTTON: u32 = 33;

    /// Checks every field, logging and returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.elastic.validate().map_err(ConfigError::from).inspect_err(|err| {
            tracing::warn!(%err, "rejecting volume configuration");
        })
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            activation_button: Self::TRIGGER_BUTTON,
            elastic: ElasticConfig::default(),
        }
    }
}
