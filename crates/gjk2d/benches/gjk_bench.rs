//! Criterion benchmarks for the GJK search.
//! Focus vertex counts: n in {3, 8, 16, 32, 64} per shape.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p gjk2d

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gjk2d::prelude::*;

fn pair(n: usize, seed: u64, offset: f64) -> (Shape2D, Shape2D) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let a = draw_shape_radial(cfg, ReplayToken::new(seed, 0), Vec2::zeros());
    let b = draw_shape_radial(cfg, ReplayToken::new(seed, 1), Vec2::new(offset, 0.0));
    (a, b)
}

fn bench_gjk(c: &mut Criterion) {
    let mut group = c.benchmark_group("gjk");
    for &n in &[3usize, 8, 16, 32, 64] {
        let (a, b) = pair(n, 41, 40.0);
        group.bench_with_input(BenchmarkId::new("intersects_overlap", n), &n, |bench, _| {
            bench.iter(|| intersects(&a, &b, Vec2::new(1.0, 0.0), 64))
        });

        let (a, b) = pair(n, 42, 200.0);
        group.bench_with_input(BenchmarkId::new("intersects_apart", n), &n, |bench, _| {
            bench.iter(|| intersects(&a, &b, Vec2::new(-1.0, 0.3), 64))
        });

        let (a, b) = pair(n, 43, 95.0);
        group.bench_with_input(BenchmarkId::new("sat_reference", n), &n, |bench, _| {
            bench.iter(|| separated_by_axes(&a, &b))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gjk);
criterion_main!(benches);
