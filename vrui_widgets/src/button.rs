// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Push buttons: momentary (trigger) or latching (toggle).
//!
//! A trigger button reads `1.0` while activated and `0.0` otherwise. A toggle
//! button flips its latch when the press ends, so its value changes on
//! release rather than on press.
//!
//! ```
//! use glam::Vec3;
//! use vrui_interaction::{Contact, CursorId, Frame, NoController, SurfaceConfig};
//! use vrui_widgets::button::{Button, ButtonKind, ButtonSurface};
//!
//! let mut button: ButtonSurface<NoController> =
//!     Button::new(ButtonKind::Toggle).build(SurfaceConfig::default()).unwrap();
//!
//! let cursor = Contact::cursor(CursorId(1));
//! button.on_trigger_enter(cursor, None);
//! button.update(&Frame::with_cursor(0.011, Vec3::new(0.0, 0.4, 0.0)));
//! button.update(&Frame::with_cursor(0.011, Vec3::new(0.0, -0.4, 0.0)));
//! assert_eq!(button.value(), 0.0);
//!
//! button.on_trigger_exit(cursor);
//! button.update(&Frame::idle(0.011));
//! assert_eq!(button.value(), 1.0);
//! assert!(button.behavior().is_toggled());
//! ```

use vrui_interaction::render::ParameterSink;
use vrui_interaction::{
    ConfigError, Controller, InteractionSurface, Listeners, SurfaceBehavior, SurfaceConfig,
    SurfaceContext, SurfaceState,
};

use crate::keys;

/// How a button reacts to a press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonKind {
    /// Pressed while held, released when let go.
    #[default]
    Trigger,
    /// Each full press flips a latch.
    Toggle,
}

impl ButtonKind {
    /// Id pushed to renderers.
    #[must_use]
    pub fn render_id(self) -> i32 {
        match self {
            Self::Trigger => 0,
            Self::Toggle => 1,
        }
    }
}

/// Button policy for an [`InteractionSurface`].
#[derive(Debug, Default)]
pub struct Button {
    kind: ButtonKind,
    toggled: bool,
    pressed: Listeners<()>,
    released: Listeners<()>,
}

/// A surface driven by a [`Button`].
pub type ButtonSurface<C> = InteractionSurface<Button, C>;

impl Button {
    /// Creates an unlatched button.
    #[must_use]
    pub fn new(kind: ButtonKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Wraps the button in a surface.
    pub fn build<C: Controller>(
        self,
        config: SurfaceConfig,
    ) -> Result<ButtonSurface<C>, ConfigError> {
        InteractionSurface::new(config, self)
    }

    /// The button's kind.
    #[must_use]
    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// State of the toggle latch; always `false` for trigger buttons.
    #[must_use]
    pub fn is_toggled(&self) -> bool {
        self.toggled
    }

    /// Fired when a trigger button is pressed, or an unlatched toggle is pressed.
    pub fn on_pressed(&mut self) -> &mut Listeners<()> {
        &mut self.pressed
    }

    /// Fired when a trigger button is let go, or a latched toggle is pressed.
    pub fn on_released(&mut self) -> &mut Listeners<()> {
        &mut self.released
    }
}

impl SurfaceBehavior for Button {
    fn on_begin(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        if state != SurfaceState::Activated {
            return;
        }
        match self.kind {
            ButtonKind::Trigger => {
                cx.set_value(1.0);
                self.pressed.emit(());
            }
            ButtonKind::Toggle if self.toggled => self.released.emit(()),
            ButtonKind::Toggle => self.pressed.emit(()),
        }
    }

    fn on_end(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        if state != SurfaceState::Activated {
            return;
        }
        match self.kind {
            ButtonKind::Trigger => {
                cx.set_value(0.0);
                self.released.emit(());
            }
            ButtonKind::Toggle => {
                self.toggled = !self.toggled;
                tracing::debug!(toggled = self.toggled, "toggle button latched");
                cx.set_value(if self.toggled { 1.0 } else { 0.0 });
            }
        }
    }

    fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_int(keys::BUTTON_KIND, self.kind.render_id());
        sink.set_int(keys::TOGGLE_STATE, i32::from(self.toggled));
    }
}
