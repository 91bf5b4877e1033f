// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger-volume geometry and the press depth derived from it.

use glam::Vec3;

/// Axis-aligned box, in the widget's local frame, whose overlap with a cursor drives interaction.
///
/// The widget's pressable face is the top of the box (`+Y`); pressing moves
/// the cursor toward `-Y`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TriggerBox {
    /// Full extents along each local axis.
    pub size: Vec3,
    /// Offset of the box center from the widget origin.
    pub center: Vec3,
}

impl Default for TriggerBox {
    fn default() -> Self {
        Self {
            size: Vec3::ONE,
            center: Vec3::ZERO,
        }
    }
}

impl TriggerBox {
    /// A unit box grown by `margin` on each axis, keeping the margin the same
    /// world width on X and Z for a widget with the given local scale.
    ///
    /// ```
    /// use glam::Vec3;
    /// use vrui_interaction::TriggerBox;
    ///
    /// // A widget twice as wide as it is deep.
    /// let trigger = TriggerBox::with_margin(0.2, Vec3::new(2.0, 1.0, 1.0));
    /// assert_eq!(trigger.size, Vec3::new(1.1, 1.2, 1.2));
    /// ```
    #[must_use]
    pub fn with_margin(margin: f32, local_scale: Vec3) -> Self {
        let depth_over_width = local_scale.z / local_scale.x;
        let depth_over_width = if depth_over_width.is_finite() && depth_over_width > 0.0 {
            depth_over_width
        } else {
            1.0
        };
        Self {
            size: Vec3::new(
                1.0 + margin * depth_over_width,
                1.0 + margin,
                1.0 + margin,
            ),
            center: Vec3::ZERO,
        }
    }

    /// Returns `true` if the box has positive, finite extents.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.size.is_finite() && self.size.cmpgt(Vec3::ZERO).all() && self.center.is_finite()
    }

    /// Normalized press depth of a cursor at `local` (the widget's local frame).
    ///
    /// `0.0` at the trigger mouth, `1.0` at its floor, clamped outside.
    /// A NaN height reads as `0.0`.
    #[must_use]
    pub fn depth(&self, local: Vec3) -> f32 {
        let mouth = self.size.y / 2.0 - self.center.y;
        let height = (local.y + mouth) / self.size.y;
        if height.is_nan() {
            return 0.0;
        }
        1.0 - height.clamp(0.0, 1.0)
    }
}
