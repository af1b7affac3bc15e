// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs, clippy::unwrap_used)]
//! Benchmark: k-d tree construction
//!
//! Builds a tree from `n` uniformly random points in `k` dimensions. Every
//! recursion level re-sorts its slice, so cost grows as `n log² n`; the
//! 10 → 100k progression makes that curve visible.
//!
//! Throughput "elements" are the number of points inserted (`n`).
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kdnn_core::{KdTree, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const SEED: u64 = 0x6B64_6275_696C_64;

fn random_points(rng: &mut StdRng, n: usize, k: usize) -> Vec<Point> {
    (0..n)
        .map(|_| (0..k).map(|_| rng.gen::<f64>()).collect())
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kd_build");
    group
        .warm_up_time(Duration::from_secs(2))
        .measurement_time(Duration::from_secs(8));
    for &k in &[2usize, 5, 10] {
        for &n in &[10usize, 100, 1_000, 10_000, 100_000] {
            let points = random_points(&mut StdRng::seed_from_u64(SEED), n, k);
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(BenchmarkId::new(format!("k{k}"), n), &points, |b, points| {
                b.iter(|| {
                    let tree = KdTree::build(black_box(points)).unwrap();
                    black_box(tree)
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_build);
criterion_main!(benches);
