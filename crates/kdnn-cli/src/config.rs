// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Dimensionalities exercised by a default run.
pub const DEFAULT_DIMS: [usize; 4] = [2, 5, 10, 20];
/// Training-set sizes exercised by a default run (orders of magnitude).
pub const DEFAULT_SIZES: [usize; 4] = [10, 100, 1_000, 10_000];
/// Query targets per experiment.
pub const DEFAULT_QUERIES: usize = 1_000;
/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x6B64_6E6E;

/// Parameters for a suite of experiments.
///
/// Precedence is defaults, then an optional JSON file, then CLI flags; every
/// field in the file is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Dimensionalities (outer loop).
    pub dims: Vec<usize>,
    /// Training-set sizes (inner loop).
    pub sizes: Vec<usize>,
    /// Query targets generated per experiment.
    pub queries: usize,
    /// RNG seed for training points and targets.
    pub seed: u64,
    /// Cross-check every tree answer against brute force.
    pub verify: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            dims: DEFAULT_DIMS.to_vec(),
            sizes: DEFAULT_SIZES.to_vec(),
            queries: DEFAULT_QUERIES,
            seed: DEFAULT_SEED,
            verify: true,
        }
    }
}

impl ExperimentConfig {
    /// Loads a config from a JSON file, filling absent fields with defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    /// Rejects configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<()> {
        if self.dims.is_empty() {
            bail!("at least one dimensionality is required");
        }
        if self.sizes.is_empty() {
            bail!("at least one dataset size is required");
        }
        if self.dims.contains(&0) {
            bail!("dimensionality must be at least 1");
        }
        if self.queries == 0 {
            bail!("query count must be at least 1");
        }
        Ok(())
    }
}
