// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::hint::black_box;
use std::time::{Duration, Instant};

use kdnn_core::{brute_force, brute_force_with_distance, KdError, KdTree};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, instrument};

use crate::config::ExperimentConfig;
use crate::dataset::random_points;

/// Largest distance gap still counted as agreement between tree and oracle.
pub const AGREEMENT_TOLERANCE: f64 = 1e-9;

/// Timings (and optional oracle agreement) for one `(k, n)` experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentResult {
    /// Dimensionality.
    pub k: usize,
    /// Training points stored in the tree.
    pub points: usize,
    /// Query targets issued.
    pub queries: usize,
    /// Time to build the tree.
    pub build: Duration,
    /// Time for all tree queries.
    pub tree_query: Duration,
    /// Time for all brute-force scans.
    pub brute_query: Duration,
    /// Queries whose tree and oracle distances agree, when verified.
    pub agreements: Option<usize>,
}

impl ExperimentResult {
    /// Brute-force time divided by tree query time.
    pub fn speedup(&self) -> f64 {
        let tree = self.tree_query.as_secs_f64();
        if tree > 0.0 {
            self.brute_query.as_secs_f64() / tree
        } else {
            f64::INFINITY
        }
    }

    /// `false` only when verification ran and some query disagreed.
    pub fn agrees(&self) -> bool {
        self.agreements.map_or(true, |a| a == self.queries)
    }
}

/// Runs one experiment: `points` random training points and `queries` random
/// targets in `k` dimensions, drawn from `rng` in that order.
///
/// Build, tree queries and brute-force scans are timed separately. With
/// `verify`, every target is additionally answered by both methods (outside
/// the timed sections) and the matching distances are counted.
#[instrument(level = "debug", skip(rng))]
pub fn run_experiment(
    k: usize,
    points: usize,
    queries: usize,
    verify: bool,
    rng: &mut StdRng,
) -> Result<ExperimentResult, KdError> {
    let training = random_points(rng, points, k);
    let targets = random_points(rng, queries, k);

    let start = Instant::now();
    let tree = KdTree::build(&training)?;
    let build = start.elapsed();

    let start = Instant::now();
    for target in &targets {
        black_box(tree.nearest(target)?);
    }
    let tree_query = start.elapsed();

    let start = Instant::now();
    for target in &targets {
        black_box(brute_force(&training, target)?);
    }
    let brute_query = start.elapsed();

    let agreements = if verify {
        let mut agree = 0;
        for target in &targets {
            let a = tree.nearest_with_distance(target)?.map(|n| n.distance);
            let b = brute_force_with_distance(&training, target)?.map(|n| n.distance);
            let same = match (a, b) {
                (Some(a), Some(b)) => (a - b).abs() <= AGREEMENT_TOLERANCE,
                (None, None) => true,
                _ => false,
            };
            if same {
                agree += 1;
            }
        }
        Some(agree)
    } else {
        None
    };

    debug!(?build, ?tree_query, ?brute_query, ?agreements, "experiment finished");
    Ok(ExperimentResult {
        k,
        points,
        queries,
        build,
        tree_query,
        brute_query,
        agreements,
    })
}

/// Runs every `(k, n)` pair from `config`, dimensionalities in the outer loop.
///
/// One RNG seeded from `config.seed` feeds the whole suite, so a given config
/// always generates the same data.
pub fn run_suite(config: &ExperimentConfig) -> anyhow::Result<Vec<ExperimentResult>> {
    config.validate()?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.dims.len() * config.sizes.len());
    for &k in &config.dims {
        for &n in &config.sizes {
            info!(k, points = n, queries = config.queries, "running experiment");
            let result = run_experiment(k, n, config.queries, config.verify, &mut rng)?;
            results.push(result);
        }
    }
    Ok(results)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn experiment_verifies_every_query() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_experiment(3, 500, 200, true, &mut rng).unwrap();
        assert_eq!(result.k, 3);
        assert_eq!(result.points, 500);
        assert_eq!(result.queries, 200);
        assert_eq!(result.agreements, Some(200));
        assert!(result.agrees());
    }

    #[test]
    fn unverified_run_reports_no_agreement_count() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = run_experiment(2, 10, 5, false, &mut rng).unwrap();
        assert_eq!(result.agreements, None);
        assert!(result.agrees());
    }

    #[test]
    fn empty_training_set_agrees_trivially() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = run_experiment(4, 0, 10, true, &mut rng).unwrap();
        assert_eq!(result.agreements, Some(10));
    }

    #[test]
    fn suite_covers_grid_in_order() {
        let config = ExperimentConfig {
            dims: vec![2, 3],
            sizes: vec![5, 50],
            queries: 20,
            seed: 9,
            verify: true,
        };
        let results = run_suite(&config).unwrap();
        let grid: Vec<(usize, usize)> = results.iter().map(|r| (r.k, r.points)).collect();
        assert_eq!(grid, vec![(2, 5), (2, 50), (3, 5), (3, 50)]);
        assert!(results.iter().all(ExperimentResult::agrees));
    }

    #[test]
    fn suite_rejects_invalid_config() {
        let config = ExperimentConfig {
            queries: 0,
            ..ExperimentConfig::default()
        };
        assert!(run_suite(&config).is_err());
    }
}
