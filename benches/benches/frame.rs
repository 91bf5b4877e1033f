// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use vrui_interaction::controller::{ButtonMask, Controller};
use vrui_interaction::{
    Contact, CursorId, Frame, InteractionSurface, NoController, SurfaceConfig, SurfaceState,
    VolumeConfig,
};
use vrui_widgets::button::{Button, ButtonKind};
use vrui_widgets::menu::{Menu, MenuConfig};
use vrui_widgets::menu_drag::{MenuDrag, sync_handle_pose};
use vrui_widgets::slider::{Slider, SliderRange};

const DT: f32 = 1.0 / 90.0;
const CURSOR: CursorId = CursorId(1);

struct Wand(ButtonMask);

impl Controller for Wand {
    fn button_state(&self, _: u32, button: u32) -> bool {
        self.0.is_pressed(button)
    }
}

/// A cursor that dips in and out of a unit-ish trigger.
fn press_path(frames: usize) -> Vec<Frame> {
    (0..frames)
        .map(|i| {
            let phase = i as f32 / frames as f32 * core::f32::consts::TAU;
            Frame::with_cursor(DT, Vec3::new(0.3 * phase.cos(), 0.6 * phase.sin(), 0.0))
        })
        .collect()
}

fn bench_frames(c: &mut Criterion) {
    let mut group = c.benchmark_group("vrui_frame");
    group.sample_size(50);

    let path = press_path(600);

    group.bench_function("surface_update(600 frames)", |b| {
        b.iter_batched(
            || {
                let mut surface: InteractionSurface<(), NoController> =
                    InteractionSurface::new(SurfaceConfig::default(), ()).unwrap();
                for state in SurfaceState::ALL {
                    surface
                        .state_data_mut(state)
                        .events
                        .continuous
                        .add(|v| {
                            black_box(v);
                        });
                }
                surface.on_trigger_enter(Contact::cursor(CURSOR), None);
                surface
            },
            |mut surface| {
                for frame in &path {
                    surface.update(frame);
                }
                black_box(surface.state());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("toggle_button(600 frames)", |b| {
        b.iter_batched(
            || {
                let mut button = Button::new(ButtonKind::Toggle)
                    .build::<NoController>(SurfaceConfig::default())
                    .unwrap();
                button.on_trigger_enter(Contact::cursor(CURSOR), None);
                button
            },
            |mut button| {
                for frame in &path {
                    button.update(frame);
                }
                button.on_trigger_exit(Contact::cursor(CURSOR));
                button.update(&Frame::idle(DT));
                black_box(button.value());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("slider(600 frames)", |b| {
        b.iter_batched(
            || {
                let mut slider = Slider::new(SliderRange::new(0.0, 100.0))
                    .build::<NoController>(SurfaceConfig::default())
                    .unwrap();
                slider.on_trigger_enter(Contact::cursor(CURSOR), None);
                slider
            },
            |mut slider| {
                for frame in &path {
                    slider.update(frame);
                }
                black_box(slider.value());
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("menu_drag(600 frames)", |b| {
        b.iter_batched(
            || {
                let wand = Rc::new(RefCell::new(Wand(ButtonMask(
                    1 << VolumeConfig::TRIGGER_BUTTON,
                ))));
                let menu = Menu::new(
                    MenuConfig {
                        can_drift: true,
                        ..MenuConfig::default()
                    },
                    glam::Affine3A::IDENTITY,
                );
                let mut volume = MenuDrag::new(menu, glam::Affine3A::IDENTITY)
                    .build(VolumeConfig::default())
                    .unwrap();
                volume.on_trigger_enter(Contact::cursor(CURSOR), Some(Rc::clone(&wand)));
                (volume, wand)
            },
            |(mut volume, wand)| {
                for frame in &path {
                    volume.update(frame);
                    volume.behavior_mut().menu_mut().drift(frame.dt);
                    sync_handle_pose(&mut volume);
                }
                wand.borrow_mut().0 = ButtonMask(0);
                volume.update(&Frame::idle(DT));
                black_box(volume.behavior().menu().position());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_frames);
criterion_main!(benches);
