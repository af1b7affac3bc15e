// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// An owned, ordered sequence of `f64` coordinates.
///
/// Points carry no identity beyond their coordinates: two points are equal
/// when every coordinate compares equal. Within one tree every point has the
/// same dimensionality, fixed by the first point handed to the builder.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Wraps `coords` as a point.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Returns the coordinates as a slice.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Returns the number of coordinates.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Consumes the point and returns its coordinate vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.coords
    }
}

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.coords
    }
}

impl From<Vec<f64>> for Point {
    fn from(coords: Vec<f64>) -> Self {
        Self::new(coords)
    }
}

impl<const N: usize> From<[f64; N]> for Point {
    fn from(coords: [f64; N]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl From<&[f64]> for Point {
    fn from(coords: &[f64]) -> Self {
        Self::new(coords.to_vec())
    }
}

impl FromIterator<f64> for Point {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
