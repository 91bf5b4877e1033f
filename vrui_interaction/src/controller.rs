// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tracked-controller capability widgets talk to.
//!
//! Widgets never see a device SDK. They hold an optional handle to something
//! implementing [`Controller`] and use it for three things: asking whether a
//! button is held, firing haptics, and reading the controller's velocity when
//! something is thrown.
//!
//! Handles are usually shared with the host's input system, so [`Controller`]
//! is implemented for `Rc<RefCell<T>>` and `Weak<RefCell<T>>`. A weak handle
//! whose device has gone away, or a cell that is already borrowed elsewhere,
//! quietly turns every call into a no-op.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vrui_interaction::controller::{ButtonMask, Controller};
//!
//! #[derive(Default)]
//! struct Pad { pressed: ButtonMask, last_pulse: f32 }
//!
//! impl Controller for Pad {
//!     fn button_state(&self, _controller_index: u32, button_index: u32) -> bool {
//!         self.pressed.is_pressed(button_index)
//!     }
//!     fn trigger_haptic_pulse(&mut self, strength: f32) {
//!         self.last_pulse = strength;
//!     }
//! }
//!
//! let pad = Rc::new(RefCell::new(Pad { pressed: ButtonMask(1 << 33), last_pulse: 0.0 }));
//! let mut handle = Rc::downgrade(&pad);
//! handle.trigger_haptic_pulse(0.5);
//! assert!(handle.button_state(0, 33));
//! assert_eq!(pad.borrow().last_pulse, 0.5);
//!
//! drop(pad);
//! assert!(!handle.button_state(0, 33));
//! ```

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use glam::Vec3;

/// Longest single haptic pulse, in microseconds, that bindings should emit.
pub const MAX_PULSE_MICROS: u16 = 3999;

/// Minimal capability surface of a tracked controller.
///
/// Only [`button_state`](Self::button_state) is required; a controller without
/// haptics or velocity tracking keeps the default no-op implementations.
pub trait Controller {
    /// Device-specific index of this controller.
    fn controller_index(&self) -> u32 {
        0
    }

    /// Returns `true` while the given button is held.
    fn button_state(&self, controller_index: u32, button_index: u32) -> bool;

    /// Fires a single short pulse; `strength` is in `0.0..=1.0`.
    fn trigger_haptic_pulse(&mut self, strength: f32) {
        let _ = strength;
    }

    /// Plays haptic feedback of the given strength for `duration_secs`.
    fn trigger_haptic_feedback(&mut self, strength: f32, duration_secs: f32) {
        let _ = (strength, duration_secs);
    }

    /// Linear velocity in world space, meters per second.
    fn velocity(&self) -> Vec3 {
        Vec3::ZERO
    }

    /// Angular velocity in world space, radians per second.
    fn angular_velocity(&self) -> Vec3 {
        Vec3::ZERO
    }
}

impl<T: Controller + ?Sized> Controller for Rc<RefCell<T>> {
    fn controller_index(&self) -> u32 {
        self.try_borrow().map_or(0, |c| c.controller_index())
    }

    fn button_state(&self, controller_index: u32, button_index: u32) -> bool {
        self.try_borrow()
            .is_ok_and(|c| c.button_state(controller_index, button_index))
    }

    fn trigger_haptic_pulse(&mut self, strength: f32) {
        if let Ok(mut c) = self.try_borrow_mut() {
            c.trigger_haptic_pulse(strength);
        }
    }

    fn trigger_haptic_feedback(&mut self, strength: f32, duration_secs: f32) {
        if let Ok(mut c) = self.try_borrow_mut() {
            c.trigger_haptic_feedback(strength, duration_secs);
        }
    }

    fn velocity(&self) -> Vec3 {
        self.try_borrow().map_or(Vec3::ZERO, |c| c.velocity())
    }

    fn angular_velocity(&self) -> Vec3 {
        self.try_borrow().map_or(Vec3::ZERO, |c| c.angular_velocity())
    }
}

impl<T: Controller + ?Sized> Controller for Weak<RefCell<T>> {
    fn controller_index(&self) -> u32 {
        self.upgrade().map_or(0, |c| c.controller_index())
    }

    fn button_state(&self, controller_index: u32, button_index: u32) -> bool {
        self.upgrade()
            .is_some_and(|c| c.button_state(controller_index, button_index))
    }

    fn trigger_haptic_pulse(&mut self, strength: f32) {
        if let Some(mut c) = self.upgrade() {
            c.trigger_haptic_pulse(strength);
        }
    }

    fn trigger_haptic_feedback(&mut self, strength: f32, duration_secs: f32) {
        if let Some(mut c) = self.upgrade() {
            c.trigger_haptic_feedback(strength, duration_secs);
        }
    }

    fn velocity(&self) -> Vec3 {
        self.upgrade().map_or(Vec3::ZERO, |c| c.velocity())
    }

    fn angular_velocity(&self) -> Vec3 {
        self.upgrade().map_or(Vec3::ZERO, |c| c.angular_velocity())
    }
}

/// Controller type for widgets that are never linked to a device.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoController {}

impl Controller for NoController {
    fn button_state(&self, _: u32, _: u32) -> bool {
        match *self {}
    }
}

/// Pressed-button bit set as reported by most tracked-device runtimes.
///
/// Bit `n` is set while button `n` is held.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ButtonMask(pub u64);

impl ButtonMask {
    /// Returns `true` if `button_index` is held. Indices past 63 are never held.
    #[must_use]
    pub fn is_pressed(self, button_index: u32) -> bool {
        1_u64
            .checked_shl(button_index)
            .is_some_and(|bit| self.0 & bit != 0)
    }
}

/// Maps a `0.0..=1.0` pulse strength to a pulse length in microseconds.
///
/// Out-of-range and NaN strengths are clamped, NaN counting as zero.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "strength is clamped so the product stays within 0..=MAX_PULSE_MICROS"
)]
pub fn haptic_pulse_micros(strength: f32) -> u16 {
    let strength = if strength.is_nan() {
        0.0
    } else {
        strength.clamp(0.0, 1.0)
    };
    (strength * f32::from(MAX_PULSE_MICROS)).round() as u16
}
