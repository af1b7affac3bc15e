// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Point;

/// One node of a [`KdTree`](crate::KdTree).
///
/// Invariants:
/// - `axis < k` where `k` is the tree's dimensionality (`axis = depth mod k`).
/// - Every point in `left` has `coord[axis] <= point[axis]`; every point in
///   `right` has `coord[axis] >= point[axis]`. Equal values may sit on either
///   side of the node, depending on where the stable sort placed them.
/// - Children are exclusively owned; there are no back references.
#[derive(Debug, Clone, PartialEq)]
pub struct KdNode {
    pub(crate) point: Point,
    pub(crate) axis: usize,
    pub(crate) left: Option<Box<KdNode>>,
    pub(crate) right: Option<Box<KdNode>>,
}

impl KdNode {
    /// The point stored at this node.
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Split axis for this node.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// Subtree holding points at or below `point[axis]`.
    pub fn left(&self) -> Option<&KdNode> {
        self.left.as_deref()
    }

    /// Subtree holding points at or above `point[axis]`.
    pub fn right(&self) -> Option<&KdNode> {
        self.right.as_deref()
    }

    /// Returns `true` when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Split value on this node's axis.
    #[inline]
    pub(crate) fn split(&self) -> f64 {
        self.point.coords()[self.axis]
    }
}
