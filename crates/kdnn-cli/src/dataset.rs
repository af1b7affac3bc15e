// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use kdnn_core::Point;
use rand::Rng;

/// A point with `k` coordinates drawn uniformly from `[0, 1)`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, k: usize) -> Point {
    (0..k).map(|_| rng.gen::<f64>()).collect()
}

/// `n` independent [`random_point`]s.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, n: usize, k: usize) -> Vec<Point> {
    (0..n).map(|_| random_point(rng, k)).collect()
}
