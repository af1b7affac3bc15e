// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Nearest-neighbor traversal with hyperplane pruning.

use crate::metric::euclidean;
use crate::{KdError, KdNode, KdTree, Point};

/// A stored point together with its distance to the query target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// The nearest stored point.
    pub point: &'a Point,
    /// Euclidean distance from the target to `point`.
    pub distance: f64,
}

/// Running best candidate threaded through the traversal.
struct Best<'a> {
    point: Option<&'a Point>,
    distance: f64,
}

impl KdTree {
    /// Returns the stored point closest to `target`, or `None` if the tree is
    /// empty.
    ///
    /// When several points are exactly equidistant the first one reached in
    /// traversal order wins; this is deterministic but is not the lowest input
    /// index. Use [`crate::brute_force`] to cross-check distances.
    ///
    /// # Errors
    /// [`KdError::DimensionMismatch`] when a non-empty tree is queried with a
    /// target of the wrong length.
    pub fn nearest(&self, target: impl AsRef<[f64]>) -> Result<Option<&Point>, KdError> {
        Ok(self.nearest_with_distance(target)?.map(|n| n.point))
    }

    /// Like [`KdTree::nearest`], but also reports the distance.
    ///
    /// # Errors
    /// Same as [`KdTree::nearest`].
    pub fn nearest_with_distance(
        &self,
        target: impl AsRef<[f64]>,
    ) -> Result<Option<Neighbor<'_>>, KdError> {
        let target = target.as_ref();
        let Some(root) = self.root() else {
            return Ok(None);
        };
        if target.len() != self.raw_dim() {
            return Err(KdError::mismatch(self.raw_dim(), target.len(), None));
        }

        // Seeded with no point at +inf so the root's own check performs the
        // first real update.
        let mut best = Best {
            point: None,
            distance: f64::INFINITY,
        };
        search(Some(root), target, &mut best);
        Ok(best.point.map(|point| Neighbor {
            point,
            distance: best.distance,
        }))
    }
}

fn search<'a>(node: Option<&'a KdNode>, target: &[f64], best: &mut Best<'a>) {
    let Some(node) = node else {
        return;
    };

    let d = euclidean(target, node.point.coords());
    if d < best.distance {
        best.point = Some(&node.point);
        best.distance = d;
    }

    let axis = node.axis;
    let split = node.split();
    // Ties on the split axis descend right first.
    let (primary, secondary) = if target[axis] < split {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    search(primary, target, best);

    // The far side can only hold a closer point if the splitting hyperplane
    // is strictly nearer than the current best.
    if (target[axis] - split).abs() < best.distance {
        search(secondary, target, best);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_tree() -> KdTree {
        KdTree::from_points([
            [2.0, 3.0],
            [5.0, 4.0],
            [9.0, 6.0],
            [4.0, 7.0],
            [8.0, 1.0],
            [7.0, 2.0],
        ])
        .unwrap()
    }

    #[test]
    fn finds_classic_nearest() {
        let tree = sample_tree();
        let hit = tree.nearest_with_distance([9.0, 2.0]).unwrap().unwrap();
        assert_eq!(hit.point.coords(), &[8.0, 1.0]);
        assert!((hit.distance - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn exact_match_has_zero_distance() {
        let tree = sample_tree();
        let hit = tree.nearest_with_distance([4.0, 7.0]).unwrap().unwrap();
        assert_eq!(hit.point.coords(), &[4.0, 7.0]);
        assert!(hit.distance.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_tree_returns_none_for_any_target() {
        let tree = KdTree::default();
        assert_eq!(tree.nearest([1.0, 2.0]).unwrap(), None);
        assert_eq!(tree.nearest([1.0, 2.0, 3.0]).unwrap(), None);
    }

    #[test]
    fn wrong_target_length_is_rejected() {
        let tree = sample_tree();
        assert_eq!(
            tree.nearest([1.0, 2.0, 3.0]),
            Err(KdError::DimensionMismatch {
                expected: 2,
                found: 3,
                index: None
            })
        );
    }

    #[test]
    fn split_axis_tie_explores_right_first() {
        // Root splits x at 1.0 and stores (1, 0). Target (1, 5) is equidistant
        // (distance 1) from (0, 5) on the left and (2, 5) on the right. The
        // right branch is primary, so (2, 5) is found first and kept.
        let tree = KdTree::from_points([[0.0, 5.0], [1.0, 0.0], [2.0, 5.0]]).unwrap();
        assert_eq!(tree.root().unwrap().point().coords(), &[1.0, 0.0]);
        let hit = tree.nearest([1.0, 5.0]).unwrap().unwrap();
        assert_eq!(hit.coords(), &[2.0, 5.0]);
    }

    #[test]
    fn pruning_still_crosses_when_hyperplane_is_closer() {
        // Target sits just right of the root split while the true nearest
        // point lives in the left subtree.
        let tree = KdTree::from_points([[0.0, 0.0], [4.9, 0.0], [5.0, 10.0], [9.0, 9.0]]).unwrap();
        let hit = tree.nearest([5.1, 0.0]).unwrap().unwrap();
        assert_eq!(hit.coords(), &[4.9, 0.0]);
    }
}
