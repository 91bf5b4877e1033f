// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabbable volume: hover while a cursor is inside, activate while a button is held.
//!
//! Unlike [`InteractionSurface`](crate::InteractionSurface), a volume does not
//! measure press depth. Activation is driven by a controller button, so the
//! volume asks the linked [`Controller`] every frame.
//!
//! ## Holding through exit
//!
//! A cursor that leaves the volume while the button is still held keeps the
//! volume activating. The exit is completed right after the frame that sees
//! the button released: activate end fires first, then hover end, then the
//! link is dropped. A drag that overshoots the trigger therefore produces one
//! activate begin and one activate end.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use vrui_interaction::controller::{ButtonMask, Controller};
//! use vrui_interaction::{Contact, CursorId, Frame, InteractionVolume, VolumeConfig, VolumeState};
//!
//! struct Pad(ButtonMask);
//!
//! impl Controller for Pad {
//!     fn button_state(&self, _: u32, button: u32) -> bool {
//!         self.0.is_pressed(button)
//!     }
//! }
//!
//! let pad = Rc::new(RefCell::new(Pad(ButtonMask(0))));
//! let mut volume = InteractionVolume::new(VolumeConfig::default(), ()).unwrap();
//!
//! volume.on_trigger_enter(Contact::cursor(CursorId(1)), Some(Rc::clone(&pad)));
//! assert_eq!(volume.state(), VolumeState::Hovering);
//!
//! pad.borrow_mut().0 = ButtonMask(1 << VolumeConfig::TRIGGER_BUTTON);
//! volume.update(&Frame::idle(0.011));
//! assert_eq!(volume.state(), VolumeState::Activating);
//!
//! // Leaving while held does not end the drag.
//! volume.on_trigger_exit(Contact::cursor(CursorId(1)));
//! volume.update(&Frame::idle(0.011));
//! assert_eq!(volume.state(), VolumeState::Activating);
//!
//! pad.borrow_mut().0 = ButtonMask(0);
//! volume.update(&Frame::idle(0.011));
//! assert_eq!(volume.state(), VolumeState::Idle);
//! ```

use glam::{Affine3A, Vec3};
use vrui_elastic::ElasticSurface;

use crate::input::{CursorLink, finite_or_zero};
use crate::render::{self, ParameterSink};
use crate::{
    ConfigError, Contact, Controller, CursorId, CursorPose, Frame, Lifecycle, StateEvents,
    VolumeConfig,
};

/// Lifecycle state of an [`InteractionVolume`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VolumeState {
    /// No cursor inside.
    #[default]
    Idle,
    /// A cursor is inside without the activation button held.
    Hovering,
    /// The activation button is held.
    Activating,
}

/// What a volume behavior sees when one of its hooks runs.
pub struct VolumeContext<'a> {
    physics: &'a mut ElasticSurface,
    controller: Option<&'a mut dyn Controller>,
    cursor: Option<CursorId>,
    cursor_pose: CursorPose,
    cursor_local: Vec3,
    volume_to_world: Affine3A,
}

impl core::fmt::Debug for VolumeContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VolumeContext")
            .field("cursor", &self.cursor)
            .field("cursor_local", &self.cursor_local)
            .field("has_controller", &self.controller.is_some())
            .finish_non_exhaustive()
    }
}

impl VolumeContext<'_> {
    /// The volume's elastic surface.
    pub fn physics(&mut self) -> &mut ElasticSurface {
        self.physics
    }

    /// The controller linked with the cursor, if it is still reachable.
    pub fn controller(&mut self) -> Option<&mut dyn Controller> {
        match &mut self.controller {
            Some(controller) => {
                let controller: &mut dyn Controller = &mut **controller;
                Some(controller)
            }
            None => None,
        }
    }

    /// The linked cursor.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorId> {
        self.cursor
    }

    /// Last world pose sampled for the linked cursor.
    #[must_use]
    pub fn cursor_pose(&self) -> CursorPose {
        self.cursor_pose
    }

    /// Last cursor position in the volume's local frame.
    #[must_use]
    pub fn cursor_local(&self) -> Vec3 {
        self.cursor_local
    }

    /// The volume's local-to-world transform.
    #[must_use]
    pub fn volume_to_world(&self) -> Affine3A {
        self.volume_to_world
    }
}

/// Policy plugged into an [`InteractionVolume`].
///
/// Hooks run for `Hovering` and `Activating`, before the matching event.
/// Every hook defaults to doing nothing.
pub trait VolumeBehavior {
    /// Called when `state` is entered.
    fn on_begin(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        let _ = (state, cx);
    }

    /// Called every frame while `state` holds.
    fn on_continuous(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        let _ = (state, cx);
    }

    /// Called when `state` ends.
    fn on_end(&mut self, state: VolumeState, cx: &mut VolumeContext<'_>) {
        let _ = (state, cx);
    }

    /// Writes behavior-specific render parameters after the volume's own.
    fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        let _ = sink;
    }
}

/// A volume with no behavior: only events fire.
impl VolumeBehavior for () {}

/// Hover/activate tracker for grabbable widgets such as menu handles.
#[derive(Debug)]
pub struct InteractionVolume<B, C> {
    config: VolumeConfig,
    physics: ElasticSurface,
    volume_to_world: Affine3A,
    volume_from_world: Affine3A,
    cursor: Option<CursorLink<C>>,
    cursor_pose: CursorPose,
    cursor_local: Vec3,
    triggering: bool,
    was_activating: bool,
    exit_deferred: bool,
    hover: StateEvents<Option<CursorId>>,
    activate: StateEvents<Option<CursorId>>,
    behavior: B,
}

impl<B: VolumeBehavior, C: Controller> InteractionVolume<B, C> {
    /// Builds an idle volume at the world origin.
    pub fn new(config: VolumeConfig, behavior: B) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            physics: ElasticSurface::new(config.elastic)?,
            volume_to_world: Affine3A::IDENTITY,
            volume_from_world: Affine3A::IDENTITY,
            cursor: None,
            cursor_pose: CursorPose::default(),
            cursor_local: Vec3::ZERO,
            triggering: false,
            was_activating: false,
            exit_deferred: false,
            hover: StateEvents::default(),
            activate: StateEvents::default(),
            behavior,
            config,
        })
    }

    /// Returns the configuration the volume was built with.
    #[must_use]
    pub fn config(&self) -> &VolumeConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> VolumeState {
        match (self.triggering, self.was_activating) {
            (false, _) => VolumeState::Idle,
            (true, false) => VolumeState::Hovering,
            (true, true) => VolumeState::Activating,
        }
    }

    /// Returns `true` while a cursor is linked and counted as inside.
    #[must_use]
    pub fn is_triggering(&self) -> bool {
        self.triggering
    }

    /// The linked cursor.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorId> {
        self.cursor.as_ref().map(|link| link.id)
    }

    /// The volume's elastic surface.
    #[must_use]
    pub fn physics(&self) -> &ElasticSurface {
        &self.physics
    }

    /// Sets the volume's world pose.
    pub fn set_pose(&mut self, volume_to_world: Affine3A) {
        self.volume_to_world = volume_to_world;
        self.volume_from_world = volume_to_world.inverse();
    }

    /// The volume's world pose.
    #[must_use]
    pub fn pose(&self) -> Affine3A {
        self.volume_to_world
    }

    /// Hover begin/continuous/end events.
    pub fn hover_events(&mut self) -> &mut StateEvents<Option<CursorId>> {
        &mut self.hover
    }

    /// Activate begin/continuous/end events.
    pub fn activate_events(&mut self) -> &mut StateEvents<Option<CursorId>> {
        &mut self.activate
    }

    /// The behavior.
    #[must_use]
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Mutable access to the behavior.
    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    /// Links a cursor and evaluates its button immediately.
    ///
    /// The contact's pose, if any, is sampled before any hook runs, so a
    /// behavior reacting to an enter with the button held sees where the
    /// cursor actually is. An activate end still owed to a previous cursor
    /// is delivered first, with that cursor's link.
    pub fn on_trigger_enter(&mut self, contact: Contact, controller: Option<C>) {
        if !contact.is_cursor {
            return;
        }
        if !self.triggering && self.was_activating {
            // Release and exit landed in one frame; the old cursor still owes its activate end.
            self.settle_owed_release();
        }
        if self.exit_deferred && self.cursor() == Some(contact.id) {
            tracing::debug!(cursor = contact.id.0, "held cursor re-entered volume");
            self.exit_deferred = false;
            if let Some(pose) = contact.pose {
                self.sample_cursor(pose);
            }
            return;
        }

        tracing::debug!(cursor = contact.id.0, "cursor entered volume");
        self.exit_deferred = false;
        self.triggering = true;
        self.cursor = Some(CursorLink {
            id: contact.id,
            controller,
        });
        if let Some(pose) = contact.pose {
            self.sample_cursor(pose);
        }

        if self.is_activating() {
            self.was_activating = true;
            self.fire(VolumeState::Activating, Lifecycle::Begin);
        } else {
            self.fire(VolumeState::Hovering, Lifecycle::Begin);
        }
    }

    /// Handles the linked cursor leaving; postponed while the button is held.
    pub fn on_trigger_exit(&mut self, contact: Contact) {
        if !contact.is_cursor || !self.triggering || self.cursor() != Some(contact.id) {
            return;
        }
        if self.is_activating() {
            tracing::debug!(cursor = contact.id.0, "cursor left volume while held");
            self.exit_deferred = true;
            return;
        }

        tracing::debug!(cursor = contact.id.0, "cursor left volume");
        self.fire(VolumeState::Hovering, Lifecycle::End);
        self.triggering = false;
        // The link survives until the activate end that is still owed.
        if !self.was_activating {
            self.cursor = None;
        }
    }

    /// Advances the volume by one frame.
    pub fn update(&mut self, frame: &Frame) {
        if self.cursor.is_some() {
            if let Some(pose) = frame.cursor {
                self.sample_cursor(pose);
            }
        }

        if self.triggering {
            if self.is_activating() {
                if self.was_activating {
                    self.fire(VolumeState::Activating, Lifecycle::Continuous);
                } else {
                    self.was_activating = true;
                    self.fire(VolumeState::Activating, Lifecycle::Begin);
                }
            } else if self.was_activating {
                self.fire(VolumeState::Activating, Lifecycle::End);
                self.was_activating = false;
                if self.exit_deferred {
                    self.finish_exit();
                }
            } else {
                self.fire(VolumeState::Hovering, Lifecycle::Continuous);
            }
        } else {
            if self.was_activating {
                self.settle_owed_release();
            }
            self.physics.simulate(frame.dt);
        }
    }

    /// Writes the per-frame render parameters.
    pub fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_vector(render::CURSOR_POSITION, self.physics.position().extend(0.0));
        self.behavior.push_render_parameters(sink);
    }

    fn sample_cursor(&mut self, pose: CursorPose) {
        self.cursor_pose = pose.finite();
        self.cursor_local =
            finite_or_zero(self.volume_from_world.transform_point3(self.cursor_pose.position));
    }

    fn settle_owed_release(&mut self) {
        self.fire(VolumeState::Activating, Lifecycle::End);
        self.was_activating = false;
        self.cursor = None;
    }

    fn finish_exit(&mut self) {
        tracing::debug!(cursor = ?self.cursor(), "completing deferred volume exit");
        self.exit_deferred = false;
        self.fire(VolumeState::Hovering, Lifecycle::End);
        self.triggering = false;
        self.cursor = None;
    }

    fn is_activating(&self) -> bool {
        let button = self.config.activation_button;
        self.cursor
            .as_ref()
            .and_then(|link| link.controller.as_ref())
            .is_some_and(|c| c.button_state(c.controller_index(), button))
    }

    fn fire(&mut self, state: VolumeState, point: Lifecycle) {
        if point != Lifecycle::Continuous {
            tracing::debug!(?state, ?point, cursor = ?self.cursor(), "volume event");
        }
        let id = self.cursor();
        let mut cx = VolumeContext {
            physics: &mut self.physics,
            controller: self
                .cursor
                .as_mut()
                .and_then(|link| link.controller.as_mut())
                .map(|c| c as &mut dyn Controller),
            cursor: id,
            cursor_pose: self.cursor_pose,
            cursor_local: self.cursor_local,
            volume_to_world: self.volume_to_world,
        };
        match point {
            Lifecycle::Begin => self.behavior.on_begin(state, &mut cx),
            Lifecycle::Continuous => self.behavior.on_continuous(state, &mut cx),
            Lifecycle::End => self.behavior.on_end(state, &mut cx),
        }
        let events = match state {
            VolumeState::Activating => &mut self.activate,
            _ => &mut self.hover,
        };
        events.at(point).emit(id);
    }
}
