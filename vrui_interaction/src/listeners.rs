// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered subscriber lists for widget events.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use vrui_interaction::Listeners;
//!
//! let total = Rc::new(Cell::new(0.0));
//! let mut on_value = Listeners::new();
//! let sink = Rc::clone(&total);
//! on_value.add(move |v: f32| sink.set(sink.get() + v));
//!
//! on_value.emit(0.25);
//! on_value.emit(0.5);
//! assert_eq!(total.get(), 0.75);
//! ```

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Most widget events have zero or one subscriber.
const INLINE_CAPACITY: usize = 2;

/// A list of callbacks invoked in subscription order.
pub struct Listeners<T> {
    entries: SmallVec<[Box<dyn FnMut(T)>; INLINE_CAPACITY]>,
}

impl<T: Copy> Listeners<T> {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Appends a callback.
    pub fn add(&mut self, listener: impl FnMut(T) + 'static) {
        self.entries.push(Box::new(listener));
    }

    /// Calls every callback with `arg`, in the order they were added.
    pub fn emit(&mut self, arg: T) {
        for listener in &mut self.entries {
            listener(arg);
        }
    }

    /// Removes every callback.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Copy> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
