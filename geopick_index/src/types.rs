// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry primitives: discriminator axes, payload-carrying points, and query rectangles.

/// Coordinate axis a tree level discriminates on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis (index 0).
    X,
    /// Vertical axis (index 1).
    Y,
}

impl Axis {
    /// Axis used at `depth`: X on even depths, Y on odd depths.
    pub const fn from_depth(depth: usize) -> Self {
        if depth.is_multiple_of(2) {
            Self::X
        } else {
            Self::Y
        }
    }

    /// Numeric discriminator: 0 for X, 1 for Y.
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }

    /// The axis used one level further down.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// An immutable 2D coordinate carrying an opaque payload.
///
/// The index never inspects or mutates the payload. Use a reference, an `Arc`, or a row
/// id as `P` when the payload is owned elsewhere.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<P> {
    x: f64,
    y: f64,
    payload: P,
}

impl<P> Point<P> {
    /// Create a point at `(x, y)` carrying `payload`.
    pub const fn new(x: f64, y: f64, payload: P) -> Self {
        Self { x, y, payload }
    }

    /// Horizontal coordinate.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Coordinate along `axis`.
    pub const fn coord(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Borrow the payload.
    pub const fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the point, returning its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Consume the point, returning `(x, y, payload)`.
    pub fn into_parts(self) -> (f64, f64, P) {
        (self.x, self.y, self.payload)
    }

    /// Build a point at the same coordinates with a transformed payload.
    pub fn map_payload<Q>(self, f: impl FnOnce(P) -> Q) -> Point<Q> {
        Point {
            x: self.x,
            y: self.y,
            payload: f(self.payload),
        }
    }
}

/// Axis-aligned query rectangle with inclusive bounds on both axes.
///
/// Always normalized so that `ll <= ur` on each axis, whatever the order of the
/// corners it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    ll: [f64; 2],
    ur: [f64; 2],
}

impl Rectangle {
    /// Create a rectangle from two opposite corners given in any order.
    pub fn from_corners(a: (f64, f64), b: (f64, f64)) -> Self {
        Self {
            ll: [a.0.min(b.0), a.1.min(b.1)],
            ur: [a.0.max(b.0), a.1.max(b.1)],
        }
    }

    /// Create a rectangle from corner coordinates `(x1, y1)` and `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::from_corners((x1, y1), (x2, y2))
    }

    /// Create a rectangle spanned by two points. Their payloads are ignored.
    pub fn from_points<A, B>(a: &Point<A>, b: &Point<B>) -> Self {
        Self::from_corners((a.x, a.y), (b.x, b.y))
    }

    /// Degenerate rectangle matching exactly the coordinate `(x, y)`.
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            ll: [x, y],
            ur: [x, y],
        }
    }

    /// Tight bounding rectangle of `points`, or `None` when there are none.
    pub fn bounding<'a, P: 'a>(points: impl IntoIterator<Item = &'a Point<P>>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut r = Self::at(first.x, first.y);
        for p in it {
            r.ll = [r.ll[0].min(p.x), r.ll[1].min(p.y)];
            r.ur = [r.ur[0].max(p.x), r.ur[1].max(p.y)];
        }
        Some(r)
    }

    /// Lower-left corner `(min_x, min_y)`.
    pub const fn ll(&self) -> (f64, f64) {
        (self.ll[0], self.ll[1])
    }

    /// Upper-right corner `(max_x, max_y)`.
    pub const fn ur(&self) -> (f64, f64) {
        (self.ur[0], self.ur[1])
    }

    /// Extent along x.
    pub fn width(&self) -> f64 {
        self.ur[0] - self.ll[0]
    }

    /// Extent along y.
    pub fn height(&self) -> f64 {
        self.ur[1] - self.ll[1]
    }

    /// Whether both corners coincide (an exact-point query).
    pub fn is_degenerate(&self) -> bool {
        self.ll == self.ur
    }

    /// Whether the coordinate lies inside, boundaries included.
    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        self.ll[0] <= x && x <= self.ur[0] && self.ll[1] <= y && y <= self.ur[1]
    }

    /// Whether the point lies inside, boundaries included.
    pub fn contains<P>(&self, p: &Point<P>) -> bool {
        self.contains_xy(p.x, p.y)
    }

    /// Whether the two rectangles share at least one coordinate.
    pub fn intersects(&self, other: &Self) -> bool {
        self.ll[0] <= other.ur[0]
            && other.ll[0] <= self.ur[0]
            && self.ll[1] <= other.ur[1]
            && other.ll[1] <= self.ur[1]
    }

    /// Where this rectangle's interval on `axis` reaches relative to `value`.
    ///
    /// Returns `(ll[axis] <= value, ur[axis] >= value)`: the first flag says the
    /// rectangle can reach coordinates at or below `value` (the left subtree of a
    /// node splitting there), the second says it can reach coordinates at or above it.
    pub fn axis_overlap(&self, value: f64, axis: Axis) -> (bool, bool) {
        let i = axis.index();
        (self.ll[i] <= value, self.ur[i] >= value)
    }
}
