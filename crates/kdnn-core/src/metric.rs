// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Euclidean distance in `f64`.
//!
//! Both the tree query and the brute-force scan compare candidates with the
//! same function, so a tree answer and an oracle answer are bit-for-bit
//! comparable when they land on the same point.

use crate::KdError;

/// Euclidean distance between `a` and `b`.
///
/// Computed as the square root of the sum of squared per-axis differences.
/// The caller guarantees `a.len() == b.len()`; extra coordinates on the longer
/// side are ignored otherwise. Use [`try_euclidean`] when lengths are not
/// already known to agree.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "euclidean: dimension mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Checked [`euclidean`]: fails with [`KdError::DimensionMismatch`] when the
/// two slices differ in length.
pub fn try_euclidean(a: &[f64], b: &[f64]) -> Result<f64, KdError> {
    if a.len() != b.len() {
        return Err(KdError::mismatch(a.len(), b.len(), None));
    }
    Ok(euclidean(a, b))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        assert!((euclidean(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert!((euclidean(&[9.0, 2.0], &[8.0, 1.0]) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let a = [1.5, -2.0, 7.25];
        let b = [0.0, 4.0, -1.0];
        assert_eq!(euclidean(&a, &b), euclidean(&b, &a));
        assert_eq!(euclidean(&a, &a), 0.0);
    }

    #[test]
    fn checked_distance_rejects_mismatched_lengths() {
        assert_eq!(
            try_euclidean(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
            Err(KdError::DimensionMismatch {
                expected: 2,
                found: 3,
                index: None
            })
        );
        assert_eq!(try_euclidean(&[], &[]), Ok(0.0));
    }
}
