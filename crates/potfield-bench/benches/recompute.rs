//! Criterion micro-benchmarks for the field sweep.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use potfield_bench::{load_engine, reference_profile, stress_profile};
use potfield_core::SourceKind;
use potfield_engine::recompute::recompute;
use potfield_space::{Grid, GridDims};

/// Benchmark: one full sweep of the reference profile (10K cells, 16 sources).
fn bench_sweep_reference(c: &mut Criterion) {
    let scene = reference_profile(42);
    let mut grid = Grid::new(GridDims::new(scene.rows, scene.cols).unwrap());

    c.bench_function("sweep_reference_10k", |b| {
        b.iter(|| {
            let m = recompute(&mut grid, &scene.sources, scene.gain);
            black_box(m);
        });
    });
}

/// Benchmark: one full sweep of the stress profile (~100K cells, 64 sources).
fn bench_sweep_stress(c: &mut Criterion) {
    let scene = stress_profile(42);
    let mut grid = Grid::new(GridDims::new(scene.rows, scene.cols).unwrap());

    c.bench_function("sweep_stress_100k", |b| {
        b.iter(|| {
            let m = recompute(&mut grid, &scene.sources, scene.gain);
            black_box(m);
        });
    });
}

/// Benchmark: register one more goal on a loaded reference engine.
fn bench_register_point(c: &mut Criterion) {
    let scene = reference_profile(42);
    let base = load_engine(&scene).unwrap();

    c.bench_function("register_point_reference", |b| {
        b.iter_batched(
            || base.clone(),
            |mut engine| {
                engine.register_point(SourceKind::Goal, 50, 50).unwrap();
                black_box(engine);
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

/// Benchmark: query every cell of a loaded reference engine.
fn bench_query_all(c: &mut Criterion) {
    let scene = reference_profile(42);
    let engine = load_engine(&scene).unwrap();

    c.bench_function("query_all_reference", |b| {
        b.iter(|| {
            for y in 0..scene.rows {
                for x in 0..scene.cols {
                    black_box(engine.query_at(x, y).unwrap());
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_sweep_reference,
    bench_sweep_stress,
    bench_register_point,
    bench_query_all
);
criterion_main!(benches);
