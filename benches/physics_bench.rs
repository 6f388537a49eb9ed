use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_engine::*;
use std::hint::black_box;

fn prepare_world(columns: u32, rows: u32, parallel: bool) -> World {
    let mut config = WorldConfig::default();
    config.arena.width = 800;
    config.arena.height = 800;
    let mut world = World::new(config).expect("default config is valid");
    world.set_parallel_enabled(parallel);
    world
        .add_track(DVec2::new(100.0, 600.0), DVec2::new(700.0, 650.0), 4.0)
        .expect("track is well formed");
    world
        .spawn_grid(columns, rows, 12.0)
        .expect("grid fits in arena");
    world
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");
    for &(columns, rows) in &[(10u32, 5u32), (20, 10), (40, 20)] {
        let count = columns * rows;
        group.bench_with_input(
            BenchmarkId::new("sequential", count),
            &(columns, rows),
            |b, &(columns, rows)| {
                let mut world = prepare_world(columns, rows, false);
                b.iter(|| {
                    world.step();
                    black_box(world.last_report());
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", count),
            &(columns, rows),
            |b, &(columns, rows)| {
                let mut world = prepare_world(columns, rows, true);
                b.iter(|| {
                    world.step();
                    black_box(world.last_report());
                })
            },
        );
    }
    group.finish();
}

fn bench_dense_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_collisions");
    for &count in &[25usize, 50, 100] {
        group.bench_with_input(BenchmarkId::new("spiral", count), &count, |b, &count| {
            b.iter(|| {
                let mut config = WorldConfig::default();
                config.constants.gravity = 0.0;
                let mut world = World::new(config).expect("default config is valid");
                for i in 0..count {
                    let offset = DVec2::from_angle(i as f64 * 2.4) * 3.0 * (i as f64).sqrt();
                    world
                        .add_particle(DVec2::new(400.0, 300.0) + offset, 5.0)
                        .expect("particle fits");
                }
                black_box(world.resolve_collisions())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_world_step, bench_dense_resolution);
criterion_main!(benches);
