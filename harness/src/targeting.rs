//! Target ranking: which enemy is cheapest to reach this turn.
//!
//! The snapshot is turned into a star-shaped [`PointsGraph`] with the
//! player at the hub and one straight-line edge per enemy. One search per
//! candidate enemy runs under the configured policy; candidates are then
//! ordered by ascending path cost, ties keeping snapshot order.
//!
//! Enemies traversing earth are skipped unless they are the only enemy or
//! the configuration includes them.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use delve_search::digest::{
    canonical_hash, canonical_json_bytes, cost_repr, CanonError, ContentHash, HashDomain,
};
use delve_search::{solve, SearchProblem};

use crate::config::TargetingConfig;
use crate::snapshot::{Enemy, GameSnapshot};
use crate::worlds::points::{Metric, PointsGraph};

/// Graph point name of the player.
pub const PLAYER: &str = "digdug";

/// One reachable enemy with the cost of reaching it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetRanking {
    pub enemy_id: String,
    pub name: String,
    pub pos: [i32; 2],
    pub cost: f64,
    pub depth: u32,
    /// Point names from the player to the enemy.
    pub path: Vec<String>,
}

/// Failure ranking targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetingError {
    /// Two entities share a graph point name.
    DuplicateEntity { id: String },
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateEntity { id } => {
                write!(f, "entity id {id:?} appears more than once in the snapshot")
            }
        }
    }
}

impl std::error::Error for TargetingError {}

/// Player-to-enemy star graph for one snapshot.
///
/// # Errors
///
/// Returns [`TargetingError::DuplicateEntity`] if two enemies share an id
/// or an enemy uses the player's point name.
pub fn points_graph(snapshot: &GameSnapshot, metric: Metric) -> Result<PointsGraph, TargetingError> {
    let mut graph = PointsGraph::new(metric);
    let mut seen = BTreeSet::from([PLAYER]);
    graph.add_point(PLAYER, to_point(snapshot.digdug));

    for enemy in &snapshot.enemies {
        if !seen.insert(enemy.id.as_str()) {
            return Err(TargetingError::DuplicateEntity {
                id: enemy.id.clone(),
            });
        }
        graph.add_point(&enemy.id, to_point(enemy.pos));
        graph.connect_by_distance(PLAYER, &enemy.id);
    }
    Ok(graph)
}

fn to_point(pos: [i32; 2]) -> (f64, f64) {
    (f64::from(pos[0]), f64::from(pos[1]))
}

fn is_candidate(enemy: &Enemy, snapshot: &GameSnapshot, config: &TargetingConfig) -> bool {
    config.include_traversing || !enemy.is_traversing() || snapshot.enemies.len() == 1
}

/// Every reachable candidate enemy, cheapest first.
///
/// # Errors
///
/// Returns [`TargetingError`] if the snapshot cannot be turned into a graph.
pub fn rank_targets(
    snapshot: &GameSnapshot,
    config: &TargetingConfig,
) -> Result<Vec<TargetRanking>, TargetingError> {
    let graph = points_graph(snapshot, config.metric)?;
    let mut ranking = Vec::new();

    for enemy in &snapshot.enemies {
        if !is_candidate(enemy, snapshot, config) {
            log::debug!("skip {} ({}): traversing", enemy.id, enemy.name);
            continue;
        }
        let problem = SearchProblem::new(&graph, PLAYER.to_string(), enemy.id.clone());
        let Some(solution) = solve(&problem, &config.policy) else {
            log::debug!(
                "skip {} ({}): unreachable under {:?}",
                enemy.id,
                enemy.name,
                config.policy
            );
            continue;
        };
        log::debug!(
            "candidate {} ({}) at {:?}: cost={} depth={}",
            enemy.id,
            enemy.name,
            enemy.pos,
            solution.cost,
            solution.depth
        );
        ranking.push(TargetRanking {
            enemy_id: enemy.id.clone(),
            name: enemy.name.clone(),
            pos: enemy.pos,
            cost: solution.cost,
            depth: solution.depth,
            path: solution.path,
        });
    }

    ranking.sort_by(|a, b| a.cost.total_cmp(&b.cost));
    Ok(ranking)
}

/// The cheapest candidate, if any enemy is reachable.
///
/// # Errors
///
/// As [`rank_targets`].
pub fn cheapest_target(
    snapshot: &GameSnapshot,
    config: &TargetingConfig,
) -> Result<Option<TargetRanking>, TargetingError> {
    Ok(rank_targets(snapshot, config)?.into_iter().next())
}

/// Canonical JSON form of a ranking. Costs are rendered as exact strings.
#[must_use]
pub fn ranking_json(ranking: &[TargetRanking]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = ranking
        .iter()
        .map(|r| {
            serde_json::json!({
                "cost": cost_repr(r.cost),
                "depth": r.depth,
                "enemy_id": r.enemy_id,
                "name": r.name,
                "path": r.path,
                "pos": r.pos,
            })
        })
        .collect();
    serde_json::json!({ "ranking": entries })
}

/// Content digest of a ranking.
///
/// # Errors
///
/// Returns [`CanonError`] if the ranking cannot be canonicalized.
pub fn ranking_digest(ranking: &[TargetRanking]) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(&ranking_json(ranking))?;
    Ok(canonical_hash(HashDomain::TargetRanking, &bytes))
}
