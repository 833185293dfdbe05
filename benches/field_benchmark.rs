/*
 * Particle Field Benchmark
 *
 * Measures the two per-frame costs of the simulation: advancing the
 * particles and the all-pairs link pass.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use particle_field::{compute_links, Field};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const CANVAS_WIDTH: f32 = 1280.0;
const CANVAS_HEIGHT: f32 = 800.0;

// Benchmark one simulation step with the pointer inside the canvas
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            let mut field = Field::initialize_with(&mut rng, n, CANVAS_WIDTH, CANVAS_HEIGHT);
            let pointer = Some(pt2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0));

            b.iter(|| {
                field.step_with(&mut rng, black_box(pointer));
            });
        });
    }

    group.finish();
}

// Benchmark the O(n^2) link pass
fn bench_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_links");

    for count in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut rng = StdRng::seed_from_u64(42);
            let field = Field::initialize_with(&mut rng, n, CANVAS_WIDTH, CANVAS_HEIGHT);

            b.iter(|| black_box(compute_links(&field.particles, field.params.max_link_distance)));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_step, bench_links
}

criterion_main!(benches);
