// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete states of a pressable surface and the metadata attached to each.

use glam::Vec4;

use crate::Listeners;

/// Lifecycle state of an [`InteractionSurface`](crate::InteractionSurface).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceState {
    /// No cursor is interacting.
    #[default]
    Idle,
    /// A cursor is inside the trigger but has not pressed past the threshold.
    Hovering,
    /// The cursor pressed past the threshold; held until the cursor leaves.
    Activated,
    /// The cursor just left; lasts exactly one frame before `Idle`.
    Released,
}

impl SurfaceState {
    /// Every state, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Idle, Self::Hovering, Self::Activated, Self::Released];

    /// Discrete id pushed to renderers, `None` for the transient `Released` state.
    #[must_use]
    pub fn render_id(self) -> Option<i32> {
        match self {
            Self::Idle => Some(0),
            Self::Hovering => Some(1),
            Self::Activated => Some(2),
            Self::Released => None,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Hovering => 1,
            Self::Activated => 2,
            Self::Released => 3,
        }
    }
}

/// Point in a state's lifetime at which a hook or event fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// The state was just entered.
    Begin,
    /// Once per frame while the state holds.
    Continuous,
    /// The state is about to be left.
    End,
}

/// Visual and haptic feedback for one state.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StateStyle {
    /// Linear RGBA color shown while the state holds.
    pub color: Vec4,
    /// One-shot pulse strength fired when the state is entered.
    pub haptic_pulse: f32,
    /// Pulse strength re-fired every frame while the state holds.
    pub haptic_amount: f32,
}

impl Default for StateStyle {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            haptic_pulse: 0.0,
            haptic_amount: 0.0,
        }
    }
}

/// A [`StateStyle`] for each [`SurfaceState`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StateStyles {
    /// Style while idle.
    pub idle: StateStyle,
    /// Style while hovering.
    pub hovering: StateStyle,
    /// Style while activated.
    pub activated: StateStyle,
    /// Style for the one-frame released state.
    pub released: StateStyle,
}

impl StateStyles {
    /// Returns the style for `state`.
    #[must_use]
    pub fn get(&self, state: SurfaceState) -> &StateStyle {
        match state {
            SurfaceState::Idle => &self.idle,
            SurfaceState::Hovering => &self.hovering,
            SurfaceState::Activated => &self.activated,
            SurfaceState::Released => &self.released,
        }
    }
}

/// Begin/continuous/end subscriber lists for one state.
#[derive(Debug)]
pub struct StateEvents<T> {
    /// Fired right after the state is entered.
    pub begin: Listeners<T>,
    /// Fired every frame while the state holds and a cursor is present.
    pub continuous: Listeners<T>,
    /// Fired right before the state is left.
    pub end: Listeners<T>,
}

impl<T: Copy> StateEvents<T> {
    /// Returns the list for a lifecycle point.
    pub fn at(&mut self, point: Lifecycle) -> &mut Listeners<T> {
        match point {
            Lifecycle::Begin => &mut self.begin,
            Lifecycle::Continuous => &mut self.continuous,
            Lifecycle::End => &mut self.end,
        }
    }
}

impl<T: Copy> Default for StateEvents<T> {
    fn default() -> Self {
        Self {
            begin: Listeners::new(),
            continuous: Listeners::new(),
            end: Listeners::new(),
        }
    }
}

/// Everything attached to one surface state: its feedback style and its events.
#[derive(Debug, Default)]
pub struct StateData {
    /// Visual and haptic feedback.
    pub style: StateStyle,
    /// Subscribers, each receiving the surface value.
    pub events: StateEvents<f32>,
}
