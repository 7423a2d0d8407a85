/*
 * Particle Field Benchmark
 *
 * Measures the per-frame costs of the field: advancing particles, and the
 * link pass with and without the spatial grid. Rendering goes to a
 * RecordingSurface so no window is needed.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use particle_field::links::brute_force_links;
use particle_field::spatial_grid::grid_links;
use particle_field::{FieldParams, ParticleField, RecordingSurface};

const WIDTH: f32 = 1920.0;
const HEIGHT: f32 = 1080.0;

fn field_of(count: usize) -> ParticleField {
    let params = FieldParams {
        particle_count: count,
        ..FieldParams::default()
    };
    ParticleField::with_rng(WIDTH, HEIGHT, params, &mut StdRng::seed_from_u64(1))
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for count in [80, 500, 2000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut field = field_of(n);
            b.iter(|| {
                field.advance();
                black_box(&field.particles);
            });
        });
    }

    group.finish();
}

fn bench_links(c: &mut Criterion) {
    let mut group = c.benchmark_group("links");

    for count in [80, 500, 2000].iter() {
        let field = field_of(*count);

        group.bench_with_input(BenchmarkId::new("brute_force", count), &field, |b, field| {
            b.iter(|| black_box(brute_force_links(&field.particles, &field.params)));
        });
        group.bench_with_input(BenchmarkId::new("spatial_grid", count), &field, |b, field| {
            b.iter(|| black_box(grid_links(&field.particles, field.width, field.height, &field.params)));
        });
    }

    group.finish();
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for count in [80, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut field = field_of(n);
            let mut surface = RecordingSurface::new(WIDTH, HEIGHT);
            b.iter(|| black_box(field.step(&mut surface)));
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
    targets = bench_advance, bench_links, bench_frame
}

criterion_main!(benches);
