// Copyright 2025 the VRUI Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use glam::Vec3;
use vrui_elastic::{ElasticConfig, ElasticSurface};

fn bench_elastic(c: &mut Criterion) {
    let mut group = c.benchmark_group("vrui_elastic");
    group.sample_size(50);

    for (elasticity, damping) in [(2.0, 1.0), (4.0, 0.5), (1.5, 3.0)] {
        let config = ElasticConfig::new(elasticity, damping);
        group.bench_function(format!("settle(e={elasticity},d={damping})"), |b| {
            b.iter_batched(
                || {
                    let mut surface = ElasticSurface::new(config).unwrap();
                    surface.set_position(Vec3::new(1.0, -0.5, 0.25));
                    surface
                },
                |mut surface| {
                    let mut frames = 0_u32;
                    while !surface.is_at_rest() && frames < 10_000 {
                        surface.simulate(1.0 / 90.0);
                        frames += 1;
                    }
                    black_box(frames);
                },
                BatchSize::SmallInput,
            );
        });
    }

    let masked = ElasticConfig::new(2.0, 1.0).with_axis_influence(Vec3::new(1.0, 0.0, 1.0));
    group.bench_function("step_1000(masked_y)", |b| {
        b.iter_batched(
            || {
                let mut surface = ElasticSurface::new(masked).unwrap();
                surface.set_position(Vec3::splat(0.75));
                surface
            },
            |mut surface| {
                for _ in 0..1000 {
                    surface.simulate(1.0 / 90.0);
                }
                black_box(surface.position());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_elastic);
criterion_main!(benches);
