// Copyright 2025 the Geopick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Balanced 2D k-d tree built once from a point snapshot, with rectangle range search.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;

use crate::types::{Axis, Point, Rectangle};

/// Index of a node in the tree arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn get(self) -> usize {
        self.0
    }
}

/// One tree vertex. Children are arena indices owned by exactly one parent.
#[derive(Clone)]
struct Node<P> {
    point: Point<P>,
    axis: Axis,
    split: f64,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

/// Topology of one arena position, computed while partitioning.
#[derive(Copy, Clone)]
struct Link {
    axis: Axis,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

/// A point tagged with its input position, used to order ties.
struct Slot<P> {
    seq: usize,
    point: Point<P>,
}

impl<P> Slot<P> {
    fn cmp_on(&self, other: &Self, axis: Axis) -> Ordering {
        let cross = axis.next();
        self.point
            .coord(axis)
            .total_cmp(&other.point.coord(axis))
            .then_with(|| self.point.coord(cross).total_cmp(&other.point.coord(cross)))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Static 2D k-d tree over points carrying payloads of type `P`.
///
/// Nodes live in a flat arena. Each node's subtree occupies a contiguous range of the
/// arena with the node at the lower median of that range, so dropping the tree never
/// recurses.
///
/// The tree is read-only once built; see [`SharedTree`](crate::SharedTree) for replacing
/// a live tree when the source data changes.
#[derive(Clone)]
pub struct KdTree<P> {
    nodes: Vec<Node<P>>,
    root: Option<NodeIdx>,
}

impl<P> Default for KdTree<P> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<P> KdTree<P> {
    /// Build a tree whose root discriminates on x.
    pub fn build(points: impl IntoIterator<Item = Point<P>>) -> Self {
        Self::build_with_depth(points, 0)
    }

    /// Build a tree as if its root sat at `depth`; the root axis is
    /// [`Axis::from_depth(depth)`](Axis::from_depth).
    ///
    /// Every level selects the lower median (`len / 2`) along its axis with an
    /// introselect pass, so each subtree is within one node of its sibling's size.
    /// Points equal on the split axis are ordered by the other axis, then by their
    /// position in `points`; the resulting shape is therefore fixed for a given input
    /// order. Coordinates are compared with [`f64::total_cmp`].
    pub fn build_with_depth(points: impl IntoIterator<Item = Point<P>>, depth: usize) -> Self {
        let mut slots: Vec<Slot<P>> = points
            .into_iter()
            .enumerate()
            .map(|(seq, point)| Slot { seq, point })
            .collect();
        let mut links = vec![
            Link {
                axis: Axis::X,
                left: None,
                right: None,
            };
            slots.len()
        ];
        let root = Self::partition(&mut slots, 0, Axis::from_depth(depth), &mut links);
        let nodes = slots
            .into_iter()
            .zip(links)
            .map(|(slot, link)| Node {
                split: slot.point.coord(link.axis),
                point: slot.point,
                axis: link.axis,
                left: link.left,
                right: link.right,
            })
            .collect();
        Self { nodes, root }
    }

    /// Place the median of `slots` at its final arena position and recurse on both
    /// sides. `offset` is the arena position of `slots[0]`.
    fn partition(
        slots: &mut [Slot<P>],
        offset: usize,
        axis: Axis,
        links: &mut [Link],
    ) -> Option<NodeIdx> {
        if slots.is_empty() {
            return None;
        }
        let m = slots.len() / 2;
        let (below, _, above) = slots.select_nth_unstable_by(m, |a, b| a.cmp_on(b, axis));
        let left = Self::partition(below, offset, axis.next(), links);
        let right = Self::partition(above, offset + m + 1, axis.next(), links);
        links[offset + m] = Link { axis, left, right };
        Some(NodeIdx(offset + m))
    }

    /// Number of indexed points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut best = 0;
        let mut stack = vec![(root, 1_usize)];
        while let Some((i, depth)) = stack.pop() {
            best = best.max(depth);
            let n = &self.nodes[i.get()];
            for child in [n.left, n.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        best
    }

    /// Tight bounding rectangle of all points, or `None` when empty.
    pub fn bounds(&self) -> Option<Rectangle> {
        Rectangle::bounding(self.iter())
    }

    /// All points in arena order: the tree's in-order, not the search order.
    pub fn iter(&self) -> impl Iterator<Item = &Point<P>> + '_ {
        self.nodes.iter().map(|n| &n.point)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, P>> {
        self.root.map(|idx| NodeRef { tree: self, idx })
    }

    /// Lazily yield every point inside `area`, boundaries included.
    ///
    /// Points come out in pre-order: a node before its left subtree, the left subtree
    /// before the right one. Subtrees whose side of the split the rectangle cannot
    /// reach are skipped.
    ///
    /// ```
    /// use geopick_index::{KdTree, Point, Rectangle};
    ///
    /// let tree = KdTree::build([
    ///     Point::new(0.0, 0.0, 'a'),
    ///     Point::new(10.0, 0.0, 'b'),
    ///     Point::new(0.0, 10.0, 'c'),
    ///     Point::new(10.0, 10.0, 'd'),
    /// ]);
    /// let area = Rectangle::from_corners((0.0, 0.0), (15.0, 5.0));
    /// let mut hits: Vec<char> = tree.search(&area).map(|p| *p.payload()).collect();
    /// hits.sort();
    /// assert_eq!(hits, ['a', 'b']);
    /// ```
    pub fn search(&self, area: &Rectangle) -> Search<'_, P> {
        Search {
            nodes: &self.nodes,
            area: *area,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Append every point inside `area` to `out`, in [`search`](Self::search) order.
    ///
    /// `out` is not cleared, so one buffer can serve many queries.
    pub fn search_into<'a>(&'a self, area: &Rectangle, out: &mut Vec<&'a Point<P>>) {
        out.extend(self.search(area));
    }

    /// Number of points inside `area`.
    pub fn count_in(&self, area: &Rectangle) -> usize {
        self.search(area).count()
    }
}

impl<P> FromIterator<Point<P>> for KdTree<P> {
    fn from_iter<I: IntoIterator<Item = Point<P>>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<P> Debug for KdTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len())
            .field("height", &self.height())
            .field("bounds", &self.bounds())
            .finish_non_exhaustive()
    }
}

/// Borrowed view of one node of a [`KdTree`].
pub struct NodeRef<'a, P> {
    tree: &'a KdTree<P>,
    idx: NodeIdx,
}

impl<'a, P> NodeRef<'a, P> {
    fn node(&self) -> &'a Node<P> {
        &self.tree.nodes[self.idx.get()]
    }

    fn child(&self, idx: Option<NodeIdx>) -> Option<Self> {
        idx.map(|idx| Self {
            tree: self.tree,
            idx,
        })
    }

    /// The point stored at this node.
    pub fn point(&self) -> &'a Point<P> {
        &self.node().point
    }

    /// Discriminator axis of this node.
    pub fn axis(&self) -> Axis {
        self.node().axis
    }

    /// Split value: the point's coordinate along [`axis`](Self::axis).
    pub fn split(&self) -> f64 {
        self.node().split
    }

    /// Subtree holding points at or below the split.
    pub fn left(&self) -> Option<Self> {
        self.child(self.node().left)
    }

    /// Subtree holding points at or above the split.
    pub fn right(&self) -> Option<Self> {
        self.child(self.node().right)
    }
}

impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<P> Debug for NodeRef<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let p = self.point();
        f.debug_struct("NodeRef")
            .field("x", &p.x())
            .field("y", &p.y())
            .field("axis", &self.axis())
            .field("split", &self.split())
            .finish_non_exhaustive()
    }
}

/// Iterator returned by [`KdTree::search`].
///
/// Clone it to restart the remaining traversal independently.
pub struct Search<'a, P> {
    nodes: &'a [Node<P>],
    area: Rectangle,
    stack: Vec<NodeIdx>,
}

impl<'a, P> Iterator for Search<'a, P> {
    type Item = &'a Point<P>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(i) = self.stack.pop() {
            let node = &self.nodes[i.get()];
            let (go_left, go_right) = self.area.axis_overlap(node.split, node.axis);
            // Right goes on the stack first so the left subtree is drained before it.
            if go_right && let Some(r) = node.right {
                self.stack.push(r);
            }
            if go_left && let Some(l) = node.left {
                self.stack.push(l);
            }
            if self.area.contains(&node.point) {
                return Some(&node.point);
            }
        }
        None
    }
}

impl<P> Clone for Search<'_, P> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            area: self.area,
            stack: self.stack.clone(),
        }
    }
}

impl<P> Debug for Search<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Search")
            .field("area", &self.area)
            .field("pending", &self.stack.len())
            .finish_non_exhaustive()
    }
}
