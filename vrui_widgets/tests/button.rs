// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button values across full press/release cycles.

use glam::Vec3;
use vrui_interaction::{Contact, CursorId, Frame, NoController, SurfaceConfig, SurfaceState};
use vrui_widgets::button::{Button, ButtonKind, ButtonSurface};

const DT: f32 = 1.0 / 90.0;
const CURSOR: CursorId = CursorId(1);

fn toggle() -> ButtonSurface<NoController> {
    Button::new(ButtonKind::Toggle)
        .build(SurfaceConfig::default())
        .unwrap()
}

/// Hover, push past the threshold, and leave; returns the value while held.
fn click(button: &mut ButtonSurface<NoController>) -> f32 {
    button.on_trigger_enter(Contact::cursor(CURSOR), None);
    button.update(&Frame::with_cursor(DT, Vec3::new(0.0, 0.5, 0.0)));
    button.update(&Frame::with_cursor(DT, Vec3::new(0.0, -0.3, 0.0)));
    assert_eq!(button.state(), SurfaceState::Activated);
    let held = button.value();
    button.on_trigger_exit(Contact::cursor(CURSOR));
    button.update(&Frame::idle(DT));
    held
}

#[test]
fn toggle_commits_on_release() {
    let mut button = toggle();

    let held = click(&mut button);
    assert_eq!(held, 0.0);
    assert_eq!(button.value(), 1.0);

    let held = click(&mut button);
    assert_eq!(held, 1.0);
    assert_eq!(button.value(), 0.0);
}

#[test]
fn backing_out_above_threshold_does_not_commit() {
    let mut button = toggle();
    button.on_trigger_enter(Contact::cursor(CURSOR), None);
    button.update(&Frame::with_cursor(DT, Vec3::new(0.0, 0.5, 0.0)));
    button.update(&Frame::with_cursor(DT, Vec3::new(0.0, -0.3, 0.0)));
    // Still inside the trigger, pulled back up: activation holds, latch untouched.
    button.update(&Frame::with_cursor(DT, Vec3::new(0.0, 0.5, 0.0)));
    assert_eq!(button.value(), 0.0);
    assert!(!button.behavior().is_toggled());

    button.on_trigger_exit(Contact::cursor(CURSOR));
    button.update(&Frame::idle(DT));
    assert_eq!(button.value(), 1.0);
}

#[test]
fn hover_without_press_changes_nothing() {
    let mut button = toggle();
    button.on_trigger_enter(Contact::cursor(CURSOR), None);
    for _ in 0..5 {
        button.update(&Frame::with_cursor(DT, Vec3::new(0.0, 0.3, 0.0)));
    }
    button.on_trigger_exit(Contact::cursor(CURSOR));
    button.update(&Frame::idle(DT));
    button.update(&Frame::idle(DT));
    assert_eq!(button.value(), 0.0);
    assert!(!button.behavior().is_toggled());
}

#[test]
fn trigger_button_value_follows_the_press() {
    let mut button: ButtonSurface<NoController> = Button::new(ButtonKind::Trigger)
        .build(SurfaceConfig::default())
        .unwrap();
    let held = click(&mut button);
    assert_eq!(held, 1.0);
    assert_eq!(button.value(), 0.0);
}
