//! Search policy types: strategy selection and depth limit.

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Frontier merge strategy.
///
/// The set is closed: each variant only decides how newly generated nodes
/// are merged into the open set. Removal always takes the head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Append new nodes to the back (FIFO).
    BreadthFirst,
    /// Put the new batch in front of the open set (LIFO), keeping the
    /// batch in domain order.
    DepthFirst,
    /// Order by `path_cost`.
    UniformCost,
    /// Order by `heuristic`.
    Greedy,
    /// Order by `path_cost + heuristic`.
    AStar,
}

impl Strategy {
    /// All strategies in declaration order.
    pub const ALL: [Strategy; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::Greedy,
        Self::AStar,
    ];

    /// Short string tag (`breadth`, `depth`, `uniform`, `greedy`, `a*`).
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth",
            Self::DepthFirst => "depth",
            Self::UniformCost => "uniform",
            Self::Greedy => "greedy",
            Self::AStar => "a*",
        }
    }

    /// Ordering key for the priority-ordered strategies; `None` for the
    /// positional ones (breadth-first, depth-first).
    #[must_use]
    pub fn priority(self, path_cost: f64, heuristic: f64) -> Option<f64> {
        match self {
            Self::BreadthFirst | Self::DepthFirst => None,
            Self::UniformCost => Some(path_cost),
            Self::Greedy => Some(heuristic),
            Self::AStar => Some(path_cost + heuristic),
        }
    }

    /// Whether the first goal popped is a least-cost one.
    ///
    /// Holds for uniform-cost with non-negative costs and for A* with an
    /// admissible heuristic. Breadth-first only finds the fewest-edge path.
    #[must_use]
    pub const fn is_cost_optimal(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth" | "bfs" => Ok(Self::BreadthFirst),
            "depth" | "dfs" => Ok(Self::DepthFirst),
            "uniform" | "ucs" => Ok(Self::UniformCost),
            "greedy" => Ok(Self::Greedy),
            "a*" | "astar" => Ok(Self::AStar),
            _ => Err(SearchError::UnknownStrategy { tag: s.to_string() }),
        }
    }
}

/// Strategy plus optional exploration depth limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub strategy: Strategy,
    /// Nodes at this depth are not expanded further. `None` is unbounded.
    pub depth_limit: Option<u32>,
}

impl SearchPolicy {
    #[must_use]
    pub const fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            depth_limit: None,
        }
    }

    #[must_use]
    pub const fn with_depth_limit(self, limit: u32) -> Self {
        Self {
            depth_limit: Some(limit),
            ..self
        }
    }

    /// Parse a policy from a strategy tag.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnknownStrategy`] if `tag` is not recognised.
    pub fn from_tag(tag: &str) -> Result<Self, SearchError> {
        Ok(Self::new(tag.parse()?))
    }

    /// JSON echo of the policy, as recorded in search graph metadata.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "depth_limit": self.depth_limit,
            "strategy": self.strategy.tag(),
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::new(Strategy::AStar)
    }
}
