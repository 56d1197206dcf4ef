//! Criterion benches: divide-and-conquer vs brute force on seeded clouds.
//! Sizes: n in {16, 128, 1024, 8192}; brute force stops at 1024.
//! Results: by default under target/criterion.

use closest_pair::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn cloud(n: usize, index: u64) -> Vec<Point> {
    let cfg = CloudCfg {
        count: n,
        extent: 1_000_000,
        duplicate_frac: 0.0,
    };
    draw_cloud(cfg, ReplayToken { seed: 43, index }).unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_pair");
    for &n in &[16usize, 128, 1024, 8192] {
        group.bench_with_input(BenchmarkId::new("divide_and_conquer", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 1).into_iter().collect::<ClosestPairSolver>(),
                |mut solver| {
                    let _d = solver.solve();
                },
                BatchSize::SmallInput,
            )
        });

        if n <= 1024 {
            group.bench_with_input(BenchmarkId::new("brute_force", n), &n, |b, &n| {
                let pts = cloud(n, 1);
                b.iter(|| {
                    let _p = brute_force(&pts);
                })
            });
        }
    }
    group.finish();
}

fn bench_leaf_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaf_size");
    let pts = cloud(4096, 2);
    for &leaf in &[2usize, 4, 8, 16] {
        group.bench_with_input(BenchmarkId::new("solve", leaf), &leaf, |b, &leaf| {
            b.iter_batched(
                || {
                    let mut s = ClosestPairSolver::with_cfg(SolverCfg::with_leaf_size(leaf));
                    s.extend(pts.iter().copied());
                    s
                },
                |mut solver| {
                    let _d = solver.solve();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_leaf_size);
criterion_main!(benches);
