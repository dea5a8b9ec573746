// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions from Kurbo geometry.

use crate::types::{Point, Rectangle};

impl From<kurbo::Rect> for Rectangle {
    /// Kurbo rectangles may be built with unordered corners; the result is normalized.
    fn from(r: kurbo::Rect) -> Self {
        Self::new(r.x0, r.y0, r.x1, r.y1)
    }
}

impl Rectangle {
    /// Create a rectangle from two Kurbo points at opposite corners.
    pub fn from_kurbo_points(a: kurbo::Point, b: kurbo::Point) -> Self {
        Self::from_corners((a.x, a.y), (b.x, b.y))
    }

    /// This rectangle as a Kurbo rectangle.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        let (x0, y0) = self.ll();
        let (x1, y1) = self.ur();
        kurbo::Rect::new(x0, y0, x1, y1)
    }
}

impl<P> Point<P> {
    /// Create a point at a Kurbo position carrying `payload`.
    pub fn from_kurbo(p: kurbo::Point, payload: P) -> Self {
        Self::new(p.x, p.y, payload)
    }

    /// The coordinates as a Kurbo point.
    pub fn to_kurbo(&self) -> kurbo::Point {
        kurbo::Point::new(self.x(), self.y())
    }
}
