// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pressable surface: the four-state machine behind buttons and sliders.
//!
//! ## Per-frame flow
//!
//! 1) The host's collision layer reports overlap with
//!    [`InteractionSurface::on_trigger_enter`] / [`InteractionSurface::on_trigger_exit`].
//! 2) The host calls [`InteractionSurface::update`] once per frame with the cursor pose.
//!    In that call the surface, in this order:
//!    - recomputes the cursor's local position and press depth,
//!    - evaluates the state transition,
//!    - dispatches the continuous hook and events of the current state,
//!    - steps the elastic surface.
//! 3) The host pushes [`InteractionSurface::push_render_parameters`] to its renderer.
//!
//! ## Transitions
//!
//! - No cursor: any non-idle state goes to `Released` for exactly one frame, then `Idle`.
//! - Cursor shallower than the threshold: `Hovering`, unless already `Activated`.
//! - `Hovering` and at or past the threshold: `Activated`.
//!
//! `Activated` only ends when the cursor leaves the trigger. Backing the
//! cursor out above the threshold keeps the surface activated, so jitter
//! around the threshold cannot produce repeated activations.
//!
//! ## Minimal example
//!
//! ```
//! use glam::Vec3;
//! use vrui_interaction::{
//!     Contact, CursorId, Frame, InteractionSurface, NoController, SurfaceConfig, SurfaceState,
//! };
//!
//! let mut surface: InteractionSurface<(), NoController> =
//!     InteractionSurface::new(SurfaceConfig::default(), ()).unwrap();
//!
//! surface.on_trigger_enter(Contact::cursor(CursorId(1)), None);
//!
//! // Touching the top of the trigger: hovering.
//! surface.update(&Frame::with_cursor(0.011, Vec3::new(0.0, 0.5, 0.0)));
//! assert_eq!(surface.state(), SurfaceState::Hovering);
//!
//! // Pushed below the middle: activated.
//! surface.update(&Frame::with_cursor(0.011, Vec3::new(0.0, -0.1, 0.0)));
//! assert_eq!(surface.state(), SurfaceState::Activated);
//!
//! // Cursor leaves: one released frame, then idle.
//! surface.on_trigger_exit(Contact::cursor(CursorId(1)));
//! surface.update(&Frame::idle(0.011));
//! assert_eq!(surface.state(), SurfaceState::Released);
//! surface.update(&Frame::idle(0.011));
//! assert_eq!(surface.state(), SurfaceState::Idle);
//! ```

use glam::{Affine3A, Vec3, Vec4};
use vrui_elastic::ElasticSurface;

use crate::input::{CursorLink, finite_or_zero};
use crate::render::{self, ParameterSink};
use crate::{
    ConfigError, Contact, Controller, CursorId, CursorPose, Frame, Lifecycle, Listeners,
    StateData, StateStyle, SurfaceConfig, SurfaceState, TriggerBox,
};

/// What a widget sees when one of its hooks runs.
#[derive(Debug)]
pub struct SurfaceContext<'a> {
    value: &'a mut f32,
    cursor_local: Vec3,
    depth: f32,
}

impl SurfaceContext<'_> {
    /// The surface's current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        *self.value
    }

    /// Replaces the surface's value.
    pub fn set_value(&mut self, value: f32) {
        *self.value = value;
    }

    /// Latest cursor position in the trigger's local frame, axis influence applied.
    #[must_use]
    pub fn cursor_local(&self) -> Vec3 {
        self.cursor_local
    }

    /// Latest press depth in `0.0..=1.0`.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.depth
    }
}

/// Widget policy plugged into an [`InteractionSurface`].
///
/// Each hook receives the state it concerns. Hooks run for `Idle`,
/// `Hovering` and `Activated`; the one-frame `Released` state only fires
/// events. Every hook defaults to doing nothing.
pub trait SurfaceBehavior {
    /// Called right after `state` is entered, before its begin event.
    fn on_begin(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        let _ = (state, cx);
    }

    /// Called every frame while `state` holds and a cursor is present.
    fn on_continuous(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        let _ = (state, cx);
    }

    /// Called right before `state` is left, before its end event.
    fn on_end(&mut self, state: SurfaceState, cx: &mut SurfaceContext<'_>) {
        let _ = (state, cx);
    }

    /// Writes widget-specific render parameters after the surface's own.
    fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        let _ = sink;
    }
}

/// A surface with no widget policy: only events fire.
impl SurfaceBehavior for () {}

/// A pressable widget surface.
///
/// `B` is the widget policy and `C` the controller handle type linked on
/// trigger enter.
#[derive(Debug)]
pub struct InteractionSurface<B, C> {
    config: SurfaceConfig,
    trigger: TriggerBox,
    local_scale: Vec3,
    trigger_from_world: Affine3A,
    renderer_from_world: Affine3A,
    physics: ElasticSurface,
    state: SurfaceState,
    render_state: i32,
    states: [StateData; 4],
    value: f32,
    depth: f32,
    cursor: Option<CursorLink<C>>,
    cursor_trigger_local: Vec3,
    cursor_renderer_local: Vec3,
    value_changed: Listeners<f32>,
    behavior: B,
}

impl<B: SurfaceBehavior, C: Controller> InteractionSurface<B, C> {
    /// Builds an idle surface with a unit trigger grown by the configured margin.
    pub fn new(config: SurfaceConfig, behavior: B) -> Result<Self, ConfigError> {
        config.validate()?;
        let physics = ElasticSurface::new(config.elastic)?;
        let states = SurfaceState::ALL.map(|state| StateData {
            style: *config.styles.get(state),
            ..StateData::default()
        });
        Ok(Self {
            trigger: TriggerBox::with_margin(config.trigger_margin, Vec3::ONE),
            local_scale: Vec3::ONE,
            trigger_from_world: Affine3A::IDENTITY,
            renderer_from_world: Affine3A::IDENTITY,
            physics,
            state: SurfaceState::Idle,
            render_state: 0,
            states,
            value: 0.0,
            depth: 0.0,
            cursor: None,
            cursor_trigger_local: Vec3::ZERO,
            cursor_renderer_local: Vec3::ZERO,
            value_changed: Listeners::new(),
            behavior,
            config,
        })
    }

    /// Returns the configuration the surface was built with.
    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Returns `true` unless the surface is idle.
    #[must_use]
    pub fn is_being_interacted(&self) -> bool {
        self.state != SurfaceState::Idle
    }

    /// Widget-defined value, `0.0..=1.0` for buttons or the mapped range for sliders.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sets the value without firing any event.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }

    /// Latest press depth.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// The cursor currently linked, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<CursorId> {
        self.cursor.as_ref().map(|link| link.id)
    }

    /// Latest cursor position in the trigger's local frame.
    #[must_use]
    pub fn cursor_local(&self) -> Vec3 {
        self.cursor_trigger_local
    }

    /// The trigger box.
    #[must_use]
    pub fn trigger(&self) -> &TriggerBox {
        &self.trigger
    }

    /// Replaces the trigger box, e.g. with the collider the host actually built.
    pub fn set_trigger(&mut self, trigger: TriggerBox) -> Result<(), ConfigError> {
        if !trigger.is_valid() {
            return Err(ConfigError::InvalidTriggerSize);
        }
        self.trigger = trigger;
        Ok(())
    }

    /// Re-derives the trigger margin for a widget with the given local scale.
    pub fn fit_trigger_to_scale(&mut self, local_scale: Vec3) {
        self.local_scale = local_scale;
        self.trigger = TriggerBox::with_margin(self.config.trigger_margin, local_scale);
    }

    /// Sets the world poses of the trigger and of the rendered mesh.
    ///
    /// Call whenever the host's scene graph moves the widget.
    pub fn set_poses(&mut self, trigger_to_world: Affine3A, renderer_to_world: Affine3A) {
        self.trigger_from_world = trigger_to_world.inverse();
        self.renderer_from_world = renderer_to_world.inverse();
    }

    /// The elastic surface driven by the cursor.
    #[must_use]
    pub fn physics(&self) -> &ElasticSurface {
        &self.physics
    }

    /// Local position of the threshold marker, on the trigger's depth axis.
    #[must_use]
    pub fn threshold_marker_position(&self) -> Vec3 {
        Vec3::new(0.0, -self.config.interaction_threshold, 0.0)
    }

    /// Metadata and events of `state`.
    #[must_use]
    pub fn state_data(&self, state: SurfaceState) -> &StateData {
        &self.states[state.index()]
    }

    /// Mutable metadata and events of `state`, for subscribing.
    pub fn state_data_mut(&mut self, state: SurfaceState) -> &mut StateData {
        &mut self.states[state.index()]
    }

    /// Listeners fired with the value every hovering or activated frame, and on [`start`](Self::start).
    pub fn value_changed(&mut self) -> &mut Listeners<f32> {
        &mut self.value_changed
    }

    /// The widget policy.
    #[must_use]
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Mutable access to the widget policy.
    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    /// Announces the initial value to value-changed listeners.
    pub fn start(&mut self) {
        self.value_changed.emit(self.value);
    }

    /// Links a cursor and its controller. Non-cursor contacts are ignored.
    pub fn on_trigger_enter(&mut self, contact: Contact, controller: Option<C>) {
        if !contact.is_cursor {
            return;
        }
        tracing::debug!(cursor = contact.id.0, "cursor entered surface trigger");
        self.cursor = Some(CursorLink {
            id: contact.id,
            controller,
        });
        if let Some(pose) = contact.pose {
            self.sample_cursor(pose);
        }
    }

    /// Drops the link to the cursor if it is the one leaving.
    pub fn on_trigger_exit(&mut self, contact: Contact) {
        if !contact.is_cursor || self.cursor() != Some(contact.id) {
            return;
        }
        tracing::debug!(cursor = contact.id.0, "cursor left surface trigger");
        self.cursor = None;
        self.depth = 0.0;
    }

    /// Advances the surface by one frame.
    pub fn update(&mut self, frame: &Frame) {
        if self.cursor.is_some() {
            if let Some(pose) = frame.cursor {
                self.sample_cursor(pose);
            }
            self.depth = self.trigger.depth(self.cursor_trigger_local);
        }

        self.evaluate_transition();

        if self.cursor.is_some() {
            self.dispatch_continuous();
        }

        if self.state == SurfaceState::Idle {
            self.physics.simulate(frame.dt);
        } else {
            self.physics.set_position(self.cursor_renderer_local);
        }
    }

    /// Moves to `next`, running the full end/begin sequence. No-op if already there.
    pub fn change_state(&mut self, next: SurfaceState) {
        let prev = self.state;
        if prev == next {
            return;
        }

        self.run_hook(prev, Lifecycle::End);
        self.states[prev.index()].events.end.emit(self.value);

        self.state = next;
        tracing::debug!(from = ?prev, to = ?next, value = self.value, "surface state change");

        if let Some(id) = next.render_id() {
            self.render_state = id;
        }
        self.pulse(self.states[next.index()].style.haptic_pulse);
        self.run_hook(next, Lifecycle::Begin);
        self.states[next.index()].events.begin.emit(self.value);
    }

    /// Writes the per-frame render parameters.
    pub fn push_render_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        let apex = self.physics.position();
        sink.set_vector(render::CURSOR_POSITION, apex.extend(0.0));
        let falloff = if self.state == SurfaceState::Activated {
            self.config.surface_falloff * 0.5
        } else {
            self.config.surface_falloff
        };
        sink.set_float(render::FALLOFF, falloff);
        sink.set_int(render::INTERACTION_STATE, self.render_state);
        sink.set_float(render::INTERACTION_THRESHOLD, self.config.interaction_threshold);
        self.behavior.push_render_parameters(sink);
    }

    /// Writes the parameters that only change with configuration or scale.
    pub fn push_setup_parameters<S: ParameterSink + ?Sized>(&self, sink: &mut S) {
        sink.set_vector(render::IDLE_COLOR, self.style(SurfaceState::Idle).color);
        sink.set_vector(render::HOVERING_COLOR, self.style(SurfaceState::Hovering).color);
        sink.set_vector(render::ACTIVATED_COLOR, self.style(SurfaceState::Activated).color);
        sink.set_float(render::INTERACTION_THRESHOLD, self.config.interaction_threshold);

        let shortest = self.local_scale.x.min(self.local_scale.z);
        let scale = if shortest > 0.0 && shortest.is_finite() {
            Vec4::new(self.local_scale.x / shortest, self.local_scale.z / shortest, 0.0, 0.0)
        } else {
            Vec4::new(1.0, 1.0, 0.0, 0.0)
        };
        sink.set_vector(render::SURFACE_SCALE, scale);
        sink.set_float(render::ICON_SCALE, self.config.icon_scale);
    }

    fn style(&self, state: SurfaceState) -> &StateStyle {
        &self.states[state.index()].style
    }

    fn sample_cursor(&mut self, pose: CursorPose) {
        let world = pose.finite().position;
        let influence = self.config.cursor_axis_influence;
        self.cursor_trigger_local =
            finite_or_zero(self.trigger_from_world.transform_point3(world) * influence);
        self.cursor_renderer_local =
            finite_or_zero(self.renderer_from_world.transform_point3(world) * influence);
    }

    fn evaluate_transition(&mut self) {
        if self.cursor.is_none() {
            match self.state {
                SurfaceState::Idle => {}
                SurfaceState::Released => self.change_state(SurfaceState::Idle),
                _ => self.change_state(SurfaceState::Released),
            }
            return;
        }

        let threshold = self.config.interaction_threshold;
        if self.depth < threshold {
            if self.state != SurfaceState::Activated {
                self.change_state(SurfaceState::Hovering);
            }
        } else if self.state == SurfaceState::Hovering {
            self.change_state(SurfaceState::Activated);
        }
    }

    fn dispatch_continuous(&mut self) {
        let state = self.state;
        self.pulse(self.style(state).haptic_amount);
        self.run_hook(state, Lifecycle::Continuous);
        if matches!(state, SurfaceState::Hovering | SurfaceState::Activated) {
            self.value_changed.emit(self.value);
        }
        self.states[state.index()].events.continuous.emit(self.value);
    }

    fn run_hook(&mut self, state: SurfaceState, point: Lifecycle) {
        if state == SurfaceState::Released {
            return;
        }
        let mut cx = SurfaceContext {
            value: &mut self.value,
            cursor_local: self.cursor_trigger_local,
            depth: self.depth,
        };
        match point {
            Lifecycle::Begin => self.behavior.on_begin(state, &mut cx),
            Lifecycle::Continuous => self.behavior.on_continuous(state, &mut cx),
            Lifecycle::End => self.behavior.on_end(state, &mut cx),
        }
    }

    fn pulse(&mut self, strength: f32) {
        if let Some(controller) = self.cursor.as_mut().and_then(|link| link.controller.as_mut()) {
            controller.trigger_haptic_pulse(strength);
        }
    }
}
