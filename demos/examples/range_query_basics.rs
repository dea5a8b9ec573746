// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range query basics.
//!
//! Build a tree from a handful of points, walk its shape, run a few rectangle searches,
//! and swap in a rebuilt tree while an old snapshot is still in use.
//!
//! Run:
//! - `cargo run -p geopick_demos --example range_query_basics`

use geopick_index::{KdTree, NodeRef, Point, Rectangle, SharedTree};

fn print_node(node: NodeRef<'_, &str>, depth: usize) {
    println!(
        "{:indent$}{} ({}, {}) split {:?} at {}",
        "",
        node.point().payload(),
        node.point().x(),
        node.point().y(),
        node.axis(),
        node.split(),
        indent = depth * 2
    );
    if let Some(left) = node.left() {
        print_node(left, depth + 1);
    }
    if let Some(right) = node.right() {
        print_node(right, depth + 1);
    }
}

fn main() {
    let tree = KdTree::build([
        Point::new(0.0, 0.0, "a"),
        Point::new(1.0, 1.0, "b"),
        Point::new(2.0, 2.0, "c"),
        Point::new(5.0, 5.0, "d"),
    ]);
    println!("{} points, height {}", tree.len(), tree.height());
    if let Some(root) = tree.root() {
        print_node(root, 0);
    }

    // Corners are inclusive, and the order they are given in does not matter.
    for area in [
        Rectangle::new(0.0, 0.0, 1.0, 1.0),
        Rectangle::new(2.0, 2.0, 0.0, 0.0),
        Rectangle::new(3.0, 3.0, 4.0, 4.0),
        Rectangle::new(5.0, 5.0, 5.0, 5.0),
    ] {
        let hits: Vec<_> = tree.search(&area).map(|p| *p.payload()).collect();
        println!("{:?} .. {:?} -> {hits:?}", area.ll(), area.ur());
    }

    // Searches are lazy; stopping early skips the rest of the walk.
    let everything = tree.bounds().expect("tree is not empty");
    let first = tree.search(&everything).next().map(|p| *p.payload());
    println!("first hit over the full extent: {first:?}");

    // Rebuilds are published whole; a snapshot keeps the tree it was taken from.
    let live = SharedTree::new(tree);
    let before = live.snapshot();
    let _ = live.rebuild([Point::new(3.0, 3.0, "e"), Point::new(4.0, 4.0, "f")]);
    println!(
        "snapshot before rebuild: {} points, live tree: {} points",
        before.len(),
        live.snapshot().len()
    );
}
