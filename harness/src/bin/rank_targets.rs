//! `rank-targets`: rank the enemies of one game snapshot by search cost.
//!
//! Prints one JSON object per reachable enemy, cheapest first. Set
//! `RUST_LOG=debug` to see every candidate, `trace` for every expansion.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use delve_harness::config::TargetingConfig;
use delve_harness::snapshot::GameSnapshot;
use delve_harness::targeting::{rank_targets, ranking_digest};
use delve_harness::worlds::points::Metric;
use delve_search::Strategy;

#[derive(Parser, Debug)]
#[command(name = "rank-targets")]
#[command(about = "Rank snapshot enemies by the cost of reaching them")]
struct Cli {
    /// Game snapshot JSON file.
    snapshot: PathBuf,

    /// Targeting config JSON file. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// breadth, depth, uniform, greedy or a*.
    #[arg(long)]
    strategy: Option<Strategy>,

    /// euclidean or manhattan.
    #[arg(long)]
    metric: Option<Metric>,

    /// Do not expand nodes at this depth.
    #[arg(long)]
    depth_limit: Option<u32>,

    /// Rank enemies that are traversing earth.
    #[arg(long)]
    include_traversing: bool,

    /// Print the ranking digest to stderr.
    #[arg(long)]
    digest: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TargetingConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => TargetingConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.policy.strategy = strategy;
    }
    if let Some(metric) = cli.metric {
        config.metric = metric;
    }
    if cli.depth_limit.is_some() {
        config.policy.depth_limit = cli.depth_limit;
    }
    config.include_traversing |= cli.include_traversing;

    let snapshot = GameSnapshot::from_path(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;
    let ranking = rank_targets(&snapshot, &config).context("ranking targets")?;

    for entry in &ranking {
        println!("{}", serde_json::to_string(entry)?);
    }
    if cli.digest {
        eprintln!("{}", ranking_digest(&ranking)?);
    }
    Ok(())
}
