// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::metric::euclidean;
use crate::{KdError, Neighbor, Point};

/// Linear-scan nearest neighbor over `points`.
///
/// Serves as the correctness oracle and performance baseline for
/// [`KdTree::nearest`](crate::KdTree::nearest). Keeps the first point that
/// reaches the minimum distance (strict `<`), so on exact ties the earliest
/// point in `points` wins. The tree may return a different point on ties, but
/// never a different distance.
///
/// # Errors
/// [`KdError::DimensionMismatch`] with the index of the first point whose
/// length differs from `target`'s. No partial result is returned.
pub fn brute_force(
    points: &[Point],
    target: impl AsRef<[f64]>,
) -> Result<Option<&Point>, KdError> {
    Ok(brute_force_with_distance(points, target)?.map(|n| n.point))
}

/// Like [`brute_force`], but also reports the distance.
///
/// # Errors
/// Same as [`brute_force`].
pub fn brute_force_with_distance(
    points: &[Point],
    target: impl AsRef<[f64]>,
) -> Result<Option<Neighbor<'_>>, KdError> {
    let target = target.as_ref();
    let mut best: Option<Neighbor<'_>> = None;
    let mut best_distance = f64::INFINITY;

    for (index, point) in points.iter().enumerate() {
        if point.dim() != target.len() {
            return Err(KdError::mismatch(target.len(), point.dim(), Some(index)));
        }
        let distance = euclidean(point.coords(), target);
        if distance < best_distance {
            best_distance = distance;
            best = Some(Neighbor { point, distance });
        }
    }
    Ok(best)
}
