// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Exact nearest-neighbor search over an immutable k-d tree.

This crate provides:
- An owned coordinate vector (`Point`) and the Euclidean metric over it.
- `KdTree`: a median-split k-d tree built once from a point snapshot.
- `KdTree::nearest`: recursive traversal with hyperplane pruning.
- `brute_force`: a linear scan used as the correctness oracle and baseline.

Design notes:
- Deterministic: the builder uses a stable sort, so identical input yields an
  identical tree shape; queries break distance ties by traversal order.
- Immutable after construction; queries take `&self` and may run from any
  number of threads at once.
- Dimensionality is validated eagerly, both at build time and per query.
"]
#![forbid(unsafe_code)]

mod brute;
mod error;
/// Euclidean distance helpers shared by the tree and the oracle.
pub mod metric;
mod node;
mod point;
mod query;
mod tree;

pub use brute::{brute_force, brute_force_with_distance};
pub use error::KdError;
pub use node::KdNode;
pub use point::Point;
pub use query::Neighbor;
pub use tree::{KdTree, Points};
