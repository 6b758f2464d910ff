//! Criterion benchmarks for [`RectDomain`] hot-path operations.
//!
//! Boundary handling calls `point_inside` and `reflect_point` once per
//! particle per step, and `intersection` once per pair of candidate regions,
//! so these are the numbers worth watching.
//!
//! Run with:
//! ```bash
//! cargo bench --package rect-domain --bench rect_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rect_domain::{RectDomain, Vector2};

// ── Fixture builders ──────────────────────────────────────────────────────────

fn world() -> RectDomain {
    RectDomain::new(Vector2::new(0.0, 0.0), Vector2::new(100.0, 100.0))
}

/// Builds `n` unit-square tiles along the diagonal of the world, half of them
/// outside it.
fn build_tiles(n: usize) -> Vec<RectDomain> {
    (0..n)
        .map(|i| {
            let offset = i as f64 * 200.0 / n as f64 - 50.0;
            RectDomain::new(Vector2::new(offset, offset), Vector2::new(1.0, 1.0))
        })
        .collect()
}

// ── Benchmarks: containment and reflection ────────────────────────────────────

fn bench_point_inside(c: &mut Criterion) {
    let d = world();
    let mut group = c.benchmark_group("point_inside");

    group.bench_function("interior", |b| {
        b.iter(|| d.point_inside(black_box(Vector2::new(50.0, 50.0))))
    });

    group.bench_function("exterior", |b| {
        b.iter(|| d.point_inside(black_box(Vector2::new(-1.0, 50.0))))
    });

    group.finish();
}

fn bench_reflect_point(c: &mut Criterion) {
    let d = world();
    let mut group = c.benchmark_group("reflect_point");

    group.bench_function("unchecked", |b| {
        b.iter(|| d.reflect_point(black_box(Vector2::new(2.0, 97.5))))
    });

    group.bench_function("checked", |b| {
        b.iter(|| d.try_reflect_point(black_box(Vector2::new(2.0, 97.5))))
    });

    group.finish();
}

// ── Benchmarks: intersection ──────────────────────────────────────────────────

fn bench_intersection(c: &mut Criterion) {
    let d = world();
    let mut group = c.benchmark_group("intersection");

    let overlapping = RectDomain::new(Vector2::new(90.0, -5.0), Vector2::new(20.0, 20.0));
    group.bench_function("overlapping", |b| {
        b.iter(|| d.intersection(black_box(&overlapping)))
    });

    // Early exit through the separating-axis check.
    let disjoint = RectDomain::new(Vector2::new(200.0, 200.0), Vector2::new(1.0, 1.0));
    group.bench_function("disjoint", |b| {
        b.iter(|| d.intersection(black_box(&disjoint)))
    });

    group.finish();
}

/// Clips a growing set of tiles against the world.
fn bench_clip_scaling(c: &mut Criterion) {
    let tile_counts = [16usize, 256, 4096];
    let d = world();
    let mut group = c.benchmark_group("clip_scaling");

    for &count in &tile_counts {
        let tiles = build_tiles(count);

        group.bench_with_input(BenchmarkId::new("tiles", count), &tiles, |b, tiles| {
            b.iter(|| {
                tiles
                    .iter()
                    .filter_map(|t| d.intersection(black_box(t)))
                    .count()
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_point_inside,
    bench_reflect_point,
    bench_intersection,
    bench_clip_scaling,
);
criterion_main!(benches);
