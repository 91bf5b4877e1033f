// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grabbing, carrying and throwing a menu by its handle.

use std::cell::RefCell;
use std::rc::Rc;

use glam::{Affine3A, Quat, Vec3, Vec4};
use vrui_interaction::controller::ButtonMask;
use vrui_interaction::render::ParameterSink;
use vrui_interaction::{
    Contact, Controller, CursorId, CursorPose, Frame, VolumeConfig, VolumeState,
};
use vrui_widgets::keys;
use vrui_widgets::menu::{Menu, MenuConfig};
use vrui_widgets::menu_drag::{
    CARRY_PULSE, HOVER_PULSE, MenuDrag, MenuDragVolume, sync_handle_pose,
};

const DT: f32 = 1.0 / 90.0;
const CURSOR: CursorId = CursorId(2);

#[derive(Default)]
struct Wand {
    pressed: ButtonMask,
    velocity: Vec3,
    angular_velocity: Vec3,
    pulses: Vec<f32>,
}

impl Controller for Wand {
    fn button_state(&self, _: u32, button: u32) -> bool {
        self.pressed.is_pressed(button)
    }

    fn trigger_haptic_pulse(&mut self, strength: f32) {
        self.pulses.push(strength);
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn angular_velocity(&self) -> Vec3 {
        self.angular_velocity
    }
}

type Handle = Rc<RefCell<Wand>>;

fn set_held(wand: &Handle, held: bool) {
    wand.borrow_mut().pressed = ButtonMask(if held {
        1 << VolumeConfig::TRIGGER_BUTTON
    } else {
        0
    });
}

/// A menu at the origin with its handle 0.5 m in front of it.
fn handle(config: MenuConfig) -> MenuDragVolume<Handle> {
    let menu = Menu::new(config, Affine3A::IDENTITY);
    MenuDrag::new(menu, Affine3A::from_translation(Vec3::new(0.0, 0.0, 0.5)))
        .build(VolumeConfig::default())
        .unwrap()
}

fn at(position: Vec3) -> Frame {
    Frame {
        dt: DT,
        cursor: Some(CursorPose::at(position)),
    }
}

#[test]
fn hovering_buzzes_and_dents_the_handle() {
    let wand = Handle::default();
    let mut volume = handle(MenuConfig::default());
    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    volume.update(&at(Vec3::new(0.05, 0.0, 0.5)));

    assert_eq!(volume.state(), VolumeState::Hovering);
    assert_eq!(wand.borrow().pulses, [HOVER_PULSE]);
    assert!(
        volume
            .physics()
            .position()
            .abs_diff_eq(Vec3::new(0.05, 0.0, 0.0), 1e-6)
    );
}

#[test]
fn grabbed_menu_follows_the_cursor_and_stays_on_release() {
    let wand = Handle::default();
    let mut volume = handle(MenuConfig::default());

    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));
    set_held(&wand, true);
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));
    assert_eq!(volume.behavior().cursor_state(), 1);
    assert!(volume.behavior().menu().is_attached());

    volume.update(&at(Vec3::new(1.0, 2.0, 0.5)));
    sync_handle_pose(&mut volume);
    assert!(
        volume
            .behavior()
            .menu()
            .position()
            .abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-5)
    );
    assert_eq!(wand.borrow().pulses.last(), Some(&CARRY_PULSE));

    set_held(&wand, false);
    volume.update(&at(Vec3::new(1.0, 2.0, 0.5)));
    assert_eq!(volume.behavior().cursor_state(), 0);
    assert!(!volume.behavior().menu().is_attached());

    volume.update(&at(Vec3::new(5.0, 5.0, 5.0)));
    assert!(
        volume
            .behavior()
            .menu()
            .position()
            .abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-5)
    );
    assert!(
        volume
            .pose()
            .translation
            .abs_diff_eq(Vec3::new(1.0, 2.0, 0.5).into(), 1e-5)
    );
}

/// Grabs the handle by hovering at `pose` and then pressing.
fn grab_after_hover(config: MenuConfig, pose: CursorPose) -> MenuDragVolume<Handle> {
    let wand = Handle::default();
    let mut volume = handle(config);
    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    volume.update(&Frame { dt: DT, cursor: Some(pose) });
    set_held(&wand, true);
    volume.update(&Frame { dt: DT, cursor: Some(pose) });
    volume
}

/// Grabs the handle by entering it at `pose` with the button already held.
fn grab_on_enter(config: MenuConfig, pose: CursorPose) -> MenuDragVolume<Handle> {
    let wand = Handle::default();
    set_held(&wand, true);
    let mut volume = handle(config);
    volume.on_trigger_enter(
        Contact::cursor(CURSOR).with_pose(pose),
        Some(Rc::clone(&wand)),
    );
    volume
}

#[test]
fn entering_held_grabs_like_hovering_then_pressing() {
    let pose = CursorPose {
        position: Vec3::new(0.0, 0.0, 0.5),
        rotation: Quat::from_rotation_y(1.0),
    };
    for config in [
        MenuConfig::default(),
        MenuConfig {
            snap_to_controller_orientation: true,
            ..MenuConfig::default()
        },
    ] {
        let mut pressed = grab_after_hover(config, pose);
        let mut entered = grab_on_enter(config, pose);
        assert_eq!(entered.state(), VolumeState::Activating);
        assert!(
            entered
                .behavior()
                .menu()
                .pose()
                .abs_diff_eq(pressed.behavior().menu().pose(), 1e-5),
            "{config:?}"
        );

        // Carrying from the same pose keeps both menus where they were grabbed.
        let held = Frame { dt: DT, cursor: Some(pose) };
        pressed.update(&held);
        entered.update(&held);
        let expected = pressed.behavior().menu().pose();
        assert!(entered.behavior().menu().pose().abs_diff_eq(expected, 1e-5));
        assert!(expected.translation.abs_diff_eq(Vec3::ZERO.into(), 1e-5));
    }
}

#[test]
fn snapping_menu_takes_the_cursor_orientation() {
    let wand = Handle::default();
    let mut volume = handle(MenuConfig {
        snap_to_controller_orientation: true,
        ..MenuConfig::default()
    });
    let rotation = Quat::from_rotation_y(1.0);

    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    volume.update(&Frame {
        dt: DT,
        cursor: Some(CursorPose {
            position: Vec3::new(0.0, 0.0, 0.5),
            rotation,
        }),
    });
    set_held(&wand, true);
    volume.update(&Frame::idle(DT));

    let (_, menu_rotation, _) = volume
        .behavior()
        .menu()
        .pose()
        .to_scale_rotation_translation();
    assert!(menu_rotation.abs_diff_eq(rotation, 1e-5));
}

#[test]
fn fast_release_throws_a_drifting_menu() {
    let wand = Handle::default();
    let mut volume = handle(MenuConfig {
        can_drift: true,
        ..MenuConfig::default()
    });

    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    set_held(&wand, true);
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));
    assert!(volume.behavior().menu().body().unwrap().frozen);

    {
        let mut w = wand.borrow_mut();
        w.velocity = Vec3::new(3.0, 0.0, 0.0);
        w.angular_velocity = Vec3::new(0.0, 0.5, 0.0);
    }
    set_held(&wand, false);
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));

    let body = *volume.behavior().menu().body().unwrap();
    assert!(!body.frozen);
    assert_eq!(body.velocity, Vec3::new(3.0, 0.0, 0.0));
    // Below the throw threshold: the spin is not inherited.
    assert_eq!(body.angular_velocity, Vec3::ZERO);

    volume.behavior_mut().menu_mut().drift(0.1);
    assert!(volume.behavior().menu().position().x > 0.0);
}

#[test]
fn slow_release_just_drops_the_menu() {
    let wand = Handle::default();
    let mut volume = handle(MenuConfig {
        can_drift: true,
        ..MenuConfig::default()
    });

    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
    set_held(&wand, true);
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));
    wand.borrow_mut().velocity = Vec3::new(0.5, 0.0, 0.0);
    set_held(&wand, false);
    volume.update(&at(Vec3::new(0.0, 0.0, 0.5)));

    assert!(volume.behavior().menu().body().unwrap().is_still());
}

#[test]
fn cursor_state_is_pushed_to_the_renderer() {
    #[derive(Default)]
    struct Sink(Vec<(&'static str, i32)>);

    impl ParameterSink for Sink {
        fn set_float(&mut self, _: &'static str, _: f32) {}
        fn set_int(&mut self, key: &'static str, value: i32) {
            self.0.push((key, value));
        }
        fn set_vector(&mut self, _: &'static str, _: Vec4) {}
    }

    let wand = Handle::default();
    let mut volume = handle(MenuConfig::default());
    set_held(&wand, true);
    volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));

    let mut sink = Sink::default();
    volume.push_render_parameters(&mut sink);
    assert_eq!(sink.0, [(keys::CURSOR_STATE, 1)]);
}
