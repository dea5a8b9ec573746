// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector with linear scans. Small and simple; the reference answer for the tree.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::RangeQuery;
use crate::types::{Point, Rectangle};

/// Points in input order, filtered one by one on every query.
#[derive(Clone)]
pub struct LinearScan<P> {
    points: Vec<Point<P>>,
}

impl<P> Default for LinearScan<P> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<P> LinearScan<P> {
    /// Wrap `points` without reordering them.
    pub fn new(points: impl IntoIterator<Item = Point<P>>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Points inside `area`, in input order.
    pub fn search<'a>(&'a self, area: &Rectangle) -> impl Iterator<Item = &'a Point<P>> + 'a {
        let area = *area;
        self.points.iter().filter(move |p| area.contains_xy(p.x(), p.y()))
    }

    /// The wrapped points, in input order.
    pub fn points(&self) -> &[Point<P>] {
        &self.points
    }
}

impl<P> RangeQuery<P> for LinearScan<P> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn query_rect<'a>(&'a self, area: &Rectangle) -> Box<dyn Iterator<Item = &'a Point<P>> + 'a> {
        Box::new(self.search(area))
    }
}

impl<P> Debug for LinearScan<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LinearScan")
            .field("len", &self.points.len())
            .finish_non_exhaustive()
    }
}
