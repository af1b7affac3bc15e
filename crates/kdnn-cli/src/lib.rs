// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Experiment harness behind the `kdnn` binary.
//!
//! Generates seeded random point sets, times tree construction, tree queries
//! and brute-force scans over the same data, and reports the results. The
//! core crate knows nothing about timing or output; everything here is a
//! consumer of its three operations.

/// Experiment configuration: defaults, JSON file, and validation.
pub mod config;
/// Seeded random point generation.
pub mod dataset;
/// Timed build/query/scan runs.
pub mod experiment;
/// Table and JSON rendering of experiment results.
pub mod report;

pub use config::ExperimentConfig;
pub use experiment::{run_experiment, run_suite, ExperimentResult};
