// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geopick Index: a static 2D k-d tree for rectangle range queries.
//!
//! Geopick Index holds a fixed snapshot of points, each carrying an opaque payload, and
//! answers "which points lie inside this axis-aligned rectangle?".
//!
//! - Build once from any sequence of [`Point`]s with [`KdTree::build`].
//! - Query with a [`Rectangle`] made from two arbitrary corners; bounds are inclusive.
//! - Results borrow the stored points, so payloads come back untouched.
//!
//! There is no insertion or removal. When the source data changes, build a new tree and
//! swap it in; with the `std` feature, [`SharedTree`] does that swap for concurrent readers.
//!
//! # Example
//!
//! ```rust
//! use geopick_index::{KdTree, Point, Rectangle};
//!
//! let tree = KdTree::build([
//!     Point::new(0.0, 0.0, "origin"),
//!     Point::new(0.0, 0.0, "also origin"),
//!     Point::new(5.0, 5.0, "center"),
//! ]);
//! assert_eq!(tree.len(), 3);
//!
//! // A degenerate rectangle is an exact-point query and finds every duplicate.
//! let hits: Vec<_> = tree.search(&Rectangle::at(0.0, 0.0)).collect();
//! assert_eq!(hits.len(), 2);
//!
//! // Corners may be given in any order.
//! let area = Rectangle::from_corners((6.0, 6.0), (4.0, 4.0));
//! let names: Vec<_> = tree.search(&area).map(|p| *p.payload()).collect();
//! assert_eq!(names, ["center"]);
//! ```
//!
//! ## Choosing a backend
//!
//! - [`KdTree`]: balanced median splits, logarithmic height; the default choice.
//! - [`LinearScan`]: filters every point on each query; useful for tiny sets and as a
//!   reference answer in tests.
//!
//! Both implement [`RangeQuery`].
//!
//! ## Features
//!
//! - `std` (default): enables [`SharedTree`].
//! - `kurbo`: conversions from `kurbo::Point` and `kurbo::Rect`. Pair it with `std` or
//!   `libm` so Kurbo has a float backend.
//!
//! ### Float semantics
//!
//! Coordinates are assumed finite. NaN coordinates never panic the builder (it orders
//! with [`f64::total_cmp`]), but a point with a NaN coordinate may be invisible to every
//! query. Validate finiteness before building or querying.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod backend;
#[cfg(feature = "kurbo")]
mod kurbo_interop;
pub mod linear;
#[cfg(feature = "std")]
pub mod shared;
pub mod tree;
pub mod types;

pub use backend::RangeQuery;
pub use linear::LinearScan;
#[cfg(feature = "std")]
pub use shared::SharedTree;
pub use tree::{KdTree, NodeRef, Search};
pub use types::{Axis, Point, Rectangle};
