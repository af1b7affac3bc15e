// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Validation failures reported by tree construction and queries.
///
/// Empty results are not errors: an empty tree or an empty point set yields
/// `Ok(None)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KdError {
    /// A point's coordinate count differs from the dimensionality in force.
    ///
    /// `index` names the offending input position for build and brute-force
    /// scans; it is `None` when the query target itself is the wrong size.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}{}", describe_index(.index))]
    DimensionMismatch {
        /// Dimensionality fixed by the first point (or the target).
        expected: usize,
        /// Coordinate count actually supplied.
        found: usize,
        /// Position of the offending point, if it came from a point set.
        index: Option<usize>,
    },

    /// The first point has no coordinates, so no split axis exists.
    #[error("points must have at least one coordinate")]
    ZeroDimension,
}

#[allow(clippy::ref_option)]
fn describe_index(index: &Option<usize>) -> String {
    index.map_or_else(String::new, |i| format!(" (point #{i})"))
}

impl KdError {
    pub(crate) const fn mismatch(expected: usize, found: usize, index: Option<usize>) -> Self {
        Self::DimensionMismatch {
            expected,
            found,
            index,
        }
    }
}
