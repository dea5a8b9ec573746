// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Copy-on-write publication of rebuilt trees.

use std::sync::{Arc, PoisonError, RwLock};

use core::fmt::Debug;

use crate::tree::KdTree;
use crate::types::Point;

/// A live tree that readers query while a replacement is built off to the side.
///
/// Readers take a [`snapshot`](Self::snapshot) (an `Arc`) and search it without holding
/// any lock. A refresh builds a complete new [`KdTree`] first and then swaps the `Arc`,
/// so no reader ever observes a partially built tree. Snapshots taken before a swap
/// keep the old tree alive until they are dropped.
pub struct SharedTree<P> {
    current: RwLock<Arc<KdTree<P>>>,
}

impl<P> SharedTree<P> {
    /// Publish `tree` as the initial version.
    pub fn new(tree: KdTree<P>) -> Self {
        Self {
            current: RwLock::new(Arc::new(tree)),
        }
    }

    /// Start with an empty tree.
    pub fn empty() -> Self {
        Self::new(KdTree::default())
    }

    /// The currently published tree.
    pub fn snapshot(&self) -> Arc<KdTree<P>> {
        // The lock only guards an `Arc` swap, so a poisoned guard still holds a whole tree.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the published tree with `tree`, returning the previous one.
    pub fn publish(&self, tree: KdTree<P>) -> Arc<KdTree<P>> {
        let next = Arc::new(tree);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        core::mem::replace(&mut *guard, next)
    }

    /// Build a new tree from `points` without blocking readers, then publish it.
    ///
    /// Returns the previously published tree.
    pub fn rebuild(&self, points: impl IntoIterator<Item = Point<P>>) -> Arc<KdTree<P>> {
        let tree = KdTree::build(points);
        self.publish(tree)
    }
}

impl<P> Default for SharedTree<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Debug for SharedTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedTree")
            .field("len", &self.snapshot().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rectangle;
    use alloc::vec::Vec;

    fn row(n: usize, y: f64) -> Vec<Point<usize>> {
        (0..n).map(|i| Point::new(i as f64, y, i)).collect()
    }

    #[test]
    fn publish_swaps_and_returns_old() {
        let shared = SharedTree::new(KdTree::build(row(3, 0.0)));
        let before = shared.snapshot();
        let old = shared.rebuild(row(5, 1.0));
        assert!(Arc::ptr_eq(&before, &old), "rebuild hands back the replaced tree");
        assert_eq!(before.len(), 3);
        assert_eq!(shared.snapshot().len(), 5);
        // The old snapshot still answers queries against the old data.
        let area = Rectangle::new(0.0, 0.0, 10.0, 0.0);
        assert_eq!(before.count_in(&area), 3);
        assert_eq!(shared.snapshot().count_in(&area), 0);
    }

    #[test]
    fn readers_always_see_a_complete_tree() {
        let shared = SharedTree::new(KdTree::build(row(100, 0.0)));
        let everything = Rectangle::new(-1.0, -1.0, 1000.0, 1.0);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        let tree = shared.snapshot();
                        let hits = tree.count_in(&everything);
                        assert_eq!(hits, tree.len(), "snapshot must be internally whole");
                        assert!(hits == 100 || hits == 500, "unexpected size {hits}");
                    }
                });
            }
            s.spawn(|| {
                for round in 0..20 {
                    let n = if round % 2 == 0 { 500 } else { 100 };
                    let _ = shared.rebuild(row(n, 0.0));
                }
            });
        });
    }

    #[test]
    fn empty_by_default() {
        let shared = SharedTree::<u8>::default();
        assert!(shared.snapshot().is_empty());
    }
}
