//! Harness runner: one search over a world, packaged with its audit log.
//!
//! # Pipeline
//!
//! ```text
//! SearchProblem::new() → SearchTree::search() → to_solution() + stats()
//!   → graph() → to_canonical_json_bytes() → canonical_hash()
//! ```
//!
//! The runner owns no search logic. It labels the result with the world
//! id and commits to the expansion log through its digest, so two runs
//! can be compared by digest alone.

use std::fmt;

use delve_search::digest::{canonical_hash, ContentHash, HashDomain};
use delve_search::{SearchPolicy, SearchProblem, SearchStats, SearchTree, Solution};

use crate::contract::SearchWorld;

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// Canonical JSON serialization of the search graph failed.
    CanonFailed { detail: String },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanonFailed { detail } => write!(f, "search graph canonicalization failed: {detail}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Result of one harness run.
#[derive(Debug, Clone)]
pub struct SearchRun<S, A> {
    pub world_id: String,
    pub policy: SearchPolicy,
    /// `None` when no goal was reachable within the policy.
    pub solution: Option<Solution<S, A>>,
    pub stats: SearchStats,
    /// Canonical JSON of the expansion log.
    pub graph_bytes: Vec<u8>,
    pub graph_digest: ContentHash,
}

/// Search `world` from `initial` to `goal` under `policy`.
///
/// # Errors
///
/// Returns [`RunError::CanonFailed`] if the expansion log cannot be
/// canonicalized.
pub fn run_search<W: SearchWorld>(
    world: &W,
    initial: W::State,
    goal: W::State,
    policy: &SearchPolicy,
) -> Result<SearchRun<W::State, W::Action>, RunError> {
    let problem = SearchProblem::new(world, initial, goal);
    let mut tree = SearchTree::new(&problem, policy.strategy);
    tree.search(policy.depth_limit);

    let graph_bytes = tree
        .graph()
        .to_canonical_json_bytes()
        .map_err(|e| RunError::CanonFailed {
            detail: e.to_string(),
        })?;
    let graph_digest = canonical_hash(HashDomain::SearchGraph, &graph_bytes);

    log::debug!(
        "{} under {}: outcome={:?} nodes={} digest={}",
        world.world_id(),
        policy.strategy,
        tree.outcome(),
        tree.nodes().len(),
        graph_digest
    );

    Ok(SearchRun {
        world_id: world.world_id().to_string(),
        policy: *policy,
        solution: tree.to_solution(),
        stats: tree.stats(),
        graph_bytes,
        graph_digest,
    })
}
