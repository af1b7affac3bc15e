// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! kdnn CLI entrypoint.
//!
//! Subcommands:
//! - `kdnn run`: time tree build, tree queries and brute-force scans over a
//!   grid of dimensionalities and dataset sizes.
//! - `kdnn query`: answer one nearest-neighbor query over points loaded from
//!   a JSON file, with the oracle's answer alongside.
//!
//! Reports go to stdout; logs go to stderr. The exit code is non-zero on
//! any error, including a failed tree/oracle agreement check.

// The CLI is expected to print to stdout.
#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use kdnn_cli::{report, run_suite, ExperimentConfig};
use kdnn_core::{brute_force_with_distance, KdTree, Point};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kdnn", version, about = "k-d tree nearest-neighbor experiments")]
struct Cli {
    /// Default log filter (overridden by RUST_LOG).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare k-d tree and brute-force timings over random data.
    Run(RunArgs),
    /// Find the nearest neighbor of one target among points from a file.
    Query(QueryArgs),
}

#[derive(Args)]
struct RunArgs {
    /// JSON config file; flags given here override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dimensionalities to test (comma separated).
    #[arg(long, value_delimiter = ',')]
    dims: Option<Vec<usize>>,

    /// Training-set sizes to test (comma separated).
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Query targets per experiment.
    #[arg(long)]
    queries: Option<usize>,

    /// RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the brute-force agreement check.
    #[arg(long)]
    no_verify: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,
}

#[derive(Args)]
struct QueryArgs {
    /// JSON file holding an array of coordinate arrays.
    #[arg(long)]
    points: PathBuf,

    /// Target coordinates (comma separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    target: Vec<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Query(args) => query(&args),
    }
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level {level}"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn resolve_config(args: &RunArgs) -> Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)?,
        None => ExperimentConfig::default(),
    };
    if let Some(dims) = &args.dims {
        config.dims.clone_from(dims);
    }
    if let Some(sizes) = &args.sizes {
        config.sizes.clone_from(sizes);
    }
    if let Some(queries) = args.queries {
        config.queries = queries;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if args.no_verify {
        config.verify = false;
    }
    config.validate()?;
    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!(?config, "starting experiment suite");
    let results = run_suite(&config)?;

    match args.format {
        Format::Table => println!("{}", report::render_table(&results)),
        Format::Json => println!("{}", report::render_json(&results)?),
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.agrees()).collect();
    for r in &failed {
        warn!(k = r.k, points = r.points, agreements = ?r.agreements, "tree disagrees with brute force");
    }
    if !failed.is_empty() {
        bail!("{} experiment(s) disagreed with the brute-force oracle", failed.len());
    }
    Ok(())
}

fn query(args: &QueryArgs) -> Result<()> {
    let bytes = std::fs::read(&args.points)
        .with_context(|| format!("read points {}", args.points.display()))?;
    let raw: Vec<Vec<f64>> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse points {}", args.points.display()))?;
    let points: Vec<Point> = raw.into_iter().map(Point::from).collect();

    let tree = KdTree::build(&points).context("build k-d tree")?;
    info!(points = tree.len(), height = tree.height(), "tree ready");

    let from_tree = tree.nearest_with_distance(&args.target).context("tree query")?;
    let from_scan = brute_force_with_distance(&points, &args.target).context("brute-force query")?;

    match (from_tree, from_scan) {
        (Some(t), Some(b)) => {
            println!("tree:  {:?} (distance {:.6})", t.point.coords(), t.distance);
            println!("brute: {:?} (distance {:.6})", b.point.coords(), b.distance);
        }
        (None, None) => println!("no points"),
        _ => bail!("tree and brute force disagree on emptiness"),
    }
    Ok(())
}
