// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range-query trait shared by the tree and the linear scan.

use alloc::boxed::Box;

use crate::types::{Point, Rectangle};

/// A read-only collection of points answering rectangle range queries.
///
/// Lets callers swap the spatial strategy (for example a linear scan for tiny sets)
/// without touching call sites.
pub trait RangeQuery<P> {
    /// Number of indexed points.
    fn len(&self) -> usize;

    /// Whether there are no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points inside `area`, boundaries included. Order is backend-specific.
    fn query_rect<'a>(&'a self, area: &Rectangle) -> Box<dyn Iterator<Item = &'a Point<P>> + 'a>;
}

impl<P> RangeQuery<P> for crate::KdTree<P> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn query_rect<'a>(&'a self, area: &Rectangle) -> Box<dyn Iterator<Item = &'a Point<P>> + 'a> {
        Box::new(self.search(area))
    }
}
