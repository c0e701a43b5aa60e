//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries: one per frontier pop, each listing what happened to every action
//! the domain offered. Node summaries are a derived index for path
//! reconstruction. States and actions are opaque to the engine, so the log
//! refers to nodes by id only.

use crate::digest::{canonical_hash, canonical_json_bytes, cost_repr, CanonError, ContentHash, HashDomain};
use crate::node::NodeId;
use crate::policy::SearchPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<NodeSummary>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier pop and its child generation.
#[derive(Debug, Clone)]
pub struct ExpandEvent {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    /// The popped node.
    pub node_id: NodeId,
    pub depth: u32,
    pub path_cost: f64,
    pub heuristic: f64,
    /// True if the popped node satisfied the goal (no children generated).
    pub is_goal: bool,
    /// One record per domain action, in domain order.
    pub children: Vec<ChildRecord>,
}

/// An action offered by the domain and what the engine did with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRecord {
    /// Position in the domain's action list.
    pub index: u64,
    pub outcome: ChildOutcome,
}

/// Outcome of processing one action during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// Created a new node.
    Applied { to_node: NodeId },
    /// The resulting state equals the expanded node's state or one of its
    /// ancestors'.
    CycleRejected,
    /// The expanded node sits at the depth limit.
    SkippedByDepthLimit,
    /// The domain reported no cost for the action.
    Inapplicable,
}

/// Derived node summary.
#[derive(Debug, Clone)]
pub struct NodeSummary {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub depth: u32,
    pub path_cost: f64,
    pub heuristic: f64,
    /// Pop order, if the node was ever popped.
    pub expansion_order: Option<u64>,
    pub is_goal: bool,
}

/// Aggregate counters and policy echo.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub policy: SearchPolicy,
    pub total_expansions: u64,
    pub total_nodes_created: u64,
    pub total_cycles_rejected: u64,
    pub total_depth_limited: u64,
    pub total_inapplicable: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped node satisfied the goal.
    GoalReached { node_id: NodeId },
    /// The open set emptied without a goal.
    FrontierExhausted,
    /// `search` has not been run to completion.
    Incomplete,
}

impl SearchGraph {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

fn usize_json(n: usize) -> serde_json::Value {
    serde_json::json!(n as u64)
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children.iter().map(child_record_to_json).collect::<Vec<_>>(),
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "heuristic": cost_repr(e.heuristic),
        "is_goal": e.is_goal,
        "node_id": usize_json(e.node_id),
        "path_cost": cost_repr(e.path_cost),
    })
}

fn child_record_to_json(r: &ChildRecord) -> serde_json::Value {
    serde_json::json!({
        "index": r.index,
        "outcome": outcome_to_json(r.outcome),
    })
}

fn outcome_to_json(o: ChildOutcome) -> serde_json::Value {
    match o {
        ChildOutcome::Applied { to_node } => {
            serde_json::json!({"to_node": usize_json(to_node), "type": "applied"})
        }
        ChildOutcome::CycleRejected => serde_json::json!({"type": "cycle_rejected"}),
        ChildOutcome::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
        ChildOutcome::Inapplicable => serde_json::json!({"type": "inapplicable"}),
    }
}

fn node_summary_to_json(n: &NodeSummary) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "heuristic": cost_repr(n.heuristic),
        "is_goal": n.is_goal,
        "node_id": usize_json(n.node_id),
        "parent_id": n.parent_id.map(usize_json),
        "path_cost": cost_repr(n.path_cost),
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "policy": m.policy.to_json(),
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_cycles_rejected": m.total_cycles_rejected,
        "total_depth_limited": m.total_depth_limited,
        "total_expansions": m.total_expansions,
        "total_inapplicable": m.total_inapplicable,
        "total_nodes_created": m.total_nodes_created,
    })
}

fn termination_reason_to_json(r: TerminationReason) -> serde_json::Value {
    match r {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": usize_json(node_id), "type": "goal_reached"})
        }
        TerminationReason::FrontierExhausted => serde_json::json!({"type": "frontier_exhausted"}),
        TerminationReason::Incomplete => serde_json::json!({"type": "incomplete"}),
    }
}
