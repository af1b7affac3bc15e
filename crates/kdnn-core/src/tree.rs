// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use tracing::debug;

use crate::{KdError, KdNode, Point};

/// Immutable k-d tree over a snapshot of points.
///
/// Built once by [`KdTree::build`]; there is no insert, remove or rebalance.
/// Dropping the tree releases the whole owned node hierarchy.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    dim: usize,
    len: usize,
}

impl KdTree {
    /// Builds a balanced tree from `points`.
    ///
    /// The dimensionality `k` is taken from the first point and every other
    /// point must match it; this is checked before any node is created. At
    /// depth `d` the points are stably sorted by coordinate `d mod k`, the
    /// element at index `n / 2` becomes the node, and the prefix and suffix
    /// become the left and right subtrees.
    ///
    /// Each level re-sorts its own slice, so construction is `O(n log² n)`.
    ///
    /// # Errors
    /// - [`KdError::ZeroDimension`] when the first point has no coordinates.
    /// - [`KdError::DimensionMismatch`] naming the first point whose length
    ///   differs from the first point's.
    pub fn build(points: &[Point]) -> Result<Self, KdError> {
        let Some(first) = points.first() else {
            debug!("built empty k-d tree");
            return Ok(Self::default());
        };
        let dim = first.dim();
        if dim == 0 {
            return Err(KdError::ZeroDimension);
        }
        if let Some((index, bad)) = points.iter().enumerate().find(|(_, p)| p.dim() != dim) {
            return Err(KdError::mismatch(dim, bad.dim(), Some(index)));
        }

        let len = points.len();
        let root = build_subtree(points.to_vec(), 0, dim);
        let tree = Self { root, dim, len };
        debug!(points = len, k = dim, height = tree.height(), "built k-d tree");
        Ok(tree)
    }

    /// Collects `points` and builds a tree from them. See [`KdTree::build`].
    ///
    /// # Errors
    /// Same as [`KdTree::build`].
    pub fn from_points<I>(points: I) -> Result<Self, KdError>
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        Self::build(&points)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the tree was built from an empty point set.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Dimensionality `k`, or `None` for an empty tree.
    pub fn dim(&self) -> Option<usize> {
        self.root.as_ref().map(|_| self.dim)
    }

    /// Root node, absent iff the tree is empty.
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&KdNode, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|c| (c, depth + 1)));
            stack.extend(node.right().map(|c| (c, depth + 1)));
        }
        height
    }

    /// Pre-order walk over the stored points (node, then left, then right).
    pub fn iter(&self) -> Points<'_> {
        Points {
            stack: self.root().into_iter().collect(),
        }
    }

    pub(crate) const fn raw_dim(&self) -> usize {
        self.dim
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = &'a Point;
    type IntoIter = Points<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a tree's points, created by [`KdTree::iter`].
#[derive(Debug, Clone)]
pub struct Points<'a> {
    stack: Vec<&'a KdNode>,
}

impl<'a> Iterator for Points<'a> {
    type Item = &'a Point;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is visited next.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.point())
    }
}

fn build_subtree(mut points: Vec<Point>, depth: usize, dim: usize) -> Option<Box<KdNode>> {
    if points.is_empty() {
        return None;
    }
    let axis = depth % dim;
    // `sort_by` is stable: equal keys keep their input order.
    points.sort_by(|a, b| a.coords()[axis].total_cmp(&b.coords()[axis]));

    let median = points.len() / 2;
    let right = points.split_off(median + 1);
    let point = points.pop()?;

    Some(Box::new(KdNode {
        point,
        axis,
        left: build_subtree(points, depth + 1, dim),
        right: build_subtree(right, depth + 1, dim),
    }))
}
