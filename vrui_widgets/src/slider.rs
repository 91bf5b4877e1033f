// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear sliders.
//!
//! While activated, the cursor's position along the slider's local X axis
//! picks a normalized amount; the surface value is that amount eased into
//! the slider's range with a smoothstep. The slider's +X end is its minimum.

use vrui_interaction::render::ParameterSink;
use vrui_interaction::{
    ConfigError, Controller, InteractionSurface, SurfaceBehavior, SurfaceConfig, SurfaceContext,
    SurfaceState,
};

use crate::keys;

/// Output range of a slider. `min` may exceed `max` for a reversed slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderRange {
    /// Value at normalized `0.0`.
    pub min: f32,
    /// Value at normalized `1.0`.
    pub max: f32,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl SliderRange {
    /// Creates a range.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Eases a normalized amount into the range.
    #[must_use]
    pub fn ease(&self, normalized: f32) -> f32 {
        smoothstep(self.min, self.max, normalized)
    }

    /// Where `value` sits in the range, clamped to `0.0..=1.0`. An empty range maps to `0.0`.
    #[must_use]
    pub fn inverse_lerp(&self, value: f32) -> f32 {
        let span = self.max - self.min;
        if span == 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Hermite interpolation from `from` to `to`, with `t` clamped to `0.0..=1.0`.
///
/// ```
/// use vrui_widgets::slider::smoothstep;
///
/// assert_eq!(smoothstep(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(smoothstep(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(smoothstep(0.0, 10.0, 2.0), 10.0);
/// ```
#[must_use]
pub fn smoothstep(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let t = -2.0 * t * t * t + 3.0 * t * t;
    to * t + from * (1.0 - t)
}

/// Slider policy for an [`InteractionSurface`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Slider {
    range: SliderRange,
    normalized: f32,
}

/// A surface driven by a [`Slider`].
pub type SliderSurface<C> = InteractionSurface<Slider, C>;

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderRange::default())
    }
}

impl Slider {
    /// Creates a slider resting at the middle of its track.
    #[must_use]
    pub fn new(range: SliderRange) -> Self {
        Self {
            range,
            normalized: 0.5,
        }
    }

    /// Wraps the slider in a surface whose value matches the slider's position.
    pub fn build<C: Controller>(
        self,
        config: SurfaceConfig,
    ) -> Result<SliderSurface<C>, ConfigError> {
        let value = self.range.ease(self.normalized);
        let mut surface = InteractionSurface::new(config, self)?;
        surface.set_value(value);
        Ok(surface)
    }

    /// The output range.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Position along the track in `0.0..=1.0`.
    #[must_use]
    pub fn normalized(&self) -> f32 {
        self.normalized
    }

    /// Moves the track position to match a value set from outside, e.g. after
    /// [`InteractionSurface::set_value`].
    pub fn sync_from_value(&mut self, value: f32) {
        self.normalized = self.range.inverse_lerp(value);
    }
}

impl SurfaceBehavior for Slider {
    fn on_continuous(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        if state != SurfaceState::Activated {
            return;
        }
        let normalized = (0.5 - cx.cursor_local().x).clamp(0.0, 1.0);
        self.normalized = if normalized.is_nan() { self.normalized } else { normalized };
        cx.set_value(self.range.ease(self.normalized));
    }

    fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_float(keys::SLIDER_AMOUNT, self.normalized);
    }
}
