// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use geopick_index::{KdTree, LinearScan, Point, Rectangle};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_uniform_points(count: usize, extent: f64) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|i| Point::new(rng.next_f64() * extent, rng.next_f64() * extent, i as u32))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let (cx, cy) = (rng.next_f64() * 2000.0, rng.next_f64() * 2000.0);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            let id = out.len() as u32;
            out.push(Point::new(cx + dx, cy + dy, id));
        }
    }
    out
}

/// Many points sharing a handful of coordinates.
fn gen_duplicate_heavy_points(count: usize, distinct: usize) -> Vec<Point<u32>> {
    let mut rng = Rng::new(0xBADC_F00D_1234_5678);
    (0..count)
        .map(|i| {
            let k = (rng.next_u64() as usize) % distinct;
            Point::new((k % 16) as f64, (k / 16) as f64, i as u32)
        })
        .collect()
}

fn gen_queries(count: usize, extent: f64, size: f64) -> Vec<Rectangle> {
    let mut rng = Rng::new(0xFACE_FEED_CAFE_BABE);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * (extent - size);
            let y = rng.next_f64() * (extent - size);
            Rectangle::new(x, y, x + size, y + size)
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");
    for &n in &[1_000usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let uniform = gen_uniform_points(n, 1000.0);
        group.bench_function(format!("uniform_n{n}"), |b| {
            b.iter_batched(
                || uniform.clone(),
                |pts| black_box(KdTree::build(pts)),
                BatchSize::LargeInput,
            )
        });
        let clustered = gen_clustered_points(n / 100, 100, 40.0);
        group.bench_function(format!("clustered_n{n}"), |b| {
            b.iter_batched(
                || clustered.clone(),
                |pts| black_box(KdTree::build(pts)),
                BatchSize::LargeInput,
            )
        });
        let dupes = gen_duplicate_heavy_points(n, 64);
        group.bench_function(format!("duplicates_n{n}"), |b| {
            b.iter_batched(
                || dupes.clone(),
                |pts| black_box(KdTree::build(pts)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_query");
    for &n in &[10_000usize, 100_000] {
        let points = gen_uniform_points(n, 1000.0);
        let tree = KdTree::build(points.clone());
        let scan = LinearScan::new(points);
        for &size in &[5.0_f64, 50.0, 250.0] {
            let queries = gen_queries(64, 1000.0, size);
            group.throughput(Throughput::Elements(queries.len() as u64));

            group.bench_function(format!("kdtree_n{n}_q{size}"), |b| {
                b.iter(|| {
                    let hits: usize = queries.iter().map(|q| tree.count_in(q)).sum();
                    black_box(hits);
                })
            });

            group.bench_function(format!("kdtree_reuse_buffer_n{n}_q{size}"), |b| {
                let mut out = Vec::new();
                b.iter(|| {
                    for q in &queries {
                        out.clear();
                        tree.search_into(q, &mut out);
                        black_box(out.len());
                    }
                })
            });

            group.bench_function(format!("linear_n{n}_q{size}"), |b| {
                b.iter(|| {
                    let hits: usize = queries.iter().map(|q| scan.search(q).count()).sum();
                    black_box(hits);
                })
            });
        }
    }
    group.finish();
}

fn bench_first_hits(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_hits");
    let tree = KdTree::build(gen_uniform_points(100_000, 1000.0));
    let wide = Rectangle::new(0.0, 0.0, 1000.0, 1000.0);
    group.bench_function("take_10_of_all", |b| {
        b.iter(|| black_box(tree.search(&wide).take(10).count()))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_query, bench_first_hits);
criterion_main!(benches);
