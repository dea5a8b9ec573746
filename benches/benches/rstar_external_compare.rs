// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use geopick_index::{KdTree, Point, Rectangle};

use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point<u32>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let id = out.len() as u32;
            out.push(Point::new(x as f64 * cell, y as f64 * cell, id));
        }
    }
    out
}

fn to_rstar_points(v: &[Point<u32>]) -> Vec<GeomWithData<[f64; 2], u32>> {
    v.iter()
        .map(|p| GeomWithData::new([p.x(), p.y()], *p.payload()))
        .collect()
}

fn bench_rstar_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("rstar_external_compare");
    for &n in &[64usize, 256] {
        let points = gen_grid_points(n, 10.0);
        let area = Rectangle::new(100.0, 100.0, 500.0, 500.0);
        let (ll, ur) = (area.ll(), area.ur());
        let envelope = AABB::from_corners([ll.0, ll.1], [ur.0, ur.1]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("geopick_build_query_n{n}"), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| {
                    let tree = KdTree::build(pts);
                    black_box(tree.count_in(&area));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| {
                    let tree = RTree::bulk_load(pts);
                    black_box(tree.locate_in_envelope(&envelope).count());
                },
                BatchSize::SmallInput,
            )
        });

        let tree = KdTree::build(points.clone());
        let rtree = RTree::bulk_load(to_rstar_points(&points));
        group.bench_function(format!("geopick_query_only_n{n}"), |b| {
            b.iter(|| black_box(tree.count_in(&area)))
        });
        group.bench_function(format!("rstar_query_only_n{n}"), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope(&envelope).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rstar_external_compare);
criterion_main!(benches);
