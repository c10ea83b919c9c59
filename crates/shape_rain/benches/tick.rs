mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shape_rain::prelude::*;

const POPULATIONS: [usize; 3] = [10, 100, 1_000];

fn populated_simulation(population: usize) -> Simulation {
    let config = SimConfig::new(Vec2::new(800.0, 600.0))
        .with_gravity(0.0)
        .with_spawn_rate(0.0);
    let mut sim = Simulation::new(config);
    let mut rng = StdRng::seed_from_u64(0x71C5);
    let mut surface = HeadlessSurface::new();

    for i in 0..population {
        let x = (i % 100) as f32 * 8.0;
        let y = (i / 100) as f32 * 60.0;
        sim.spawn_at(Vec2::new(x, y), &mut rng, &mut surface);
    }
    sim
}

fn integration_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim/tick/integrate");

    for &population in &POPULATIONS {
        let template = populated_simulation(population);
        group.throughput(common::elements_throughput(population));

        group.bench_with_input(
            BenchmarkId::from_parameter(population),
            &population,
            |b, _| {
                let mut rng = StdRng::seed_from_u64(1);
                let mut surface = HeadlessSurface::new();
                b.iter_batched(
                    || template.clone(),
                    |mut sim| {
                        let stats = sim.tick(1.0, &mut rng, &mut surface);
                        black_box(stats);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn spawn_burst_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sim/tick/spawn_burst");

    for &burst in &[1usize, 10, 100] {
        let config = SimConfig::new(Vec2::new(800.0, 600.0)).with_spawn_rate(1.0);
        let template = Simulation::new(config);
        group.throughput(common::elements_throughput(burst));

        group.bench_with_input(BenchmarkId::from_parameter(burst), &burst, |b, &burst| {
            let mut rng = StdRng::seed_from_u64(2);
            let mut surface = HeadlessSurface::new();
            let dt = 60.0 * burst as f32;
            b.iter_batched(
                || template.clone(),
                |mut sim| {
                    let stats = sim.tick(dt, &mut rng, &mut surface);
                    black_box(stats);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = integration_benches, spawn_burst_benches
}
criterion_main!(benches);
