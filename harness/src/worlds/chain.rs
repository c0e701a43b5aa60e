//! `Chain`: a straight line of states `0..=n` with one forward action each.
//!
//! Step `i → i + 1` costs `costs[i]`. The heuristic is the exact remaining
//! cost, so every strategy walks straight to the end.

use delve_search::SearchDomain;

use crate::contract::SearchWorld;

#[derive(Debug, Clone)]
pub struct Chain {
    costs: Vec<f64>,
}

impl Chain {
    /// A chain with `costs.len() + 1` states.
    #[must_use]
    pub fn new(costs: Vec<f64>) -> Self {
        Self { costs }
    }

    /// Index of the last state.
    #[must_use]
    pub fn last(&self) -> usize {
        self.costs.len()
    }

    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().sum()
    }
}

impl SearchDomain for Chain {
    type State = usize;
    /// The index being stepped to.
    type Action = usize;

    fn actions(&self, state: &usize) -> Vec<usize> {
        if *state < self.costs.len() {
            vec![state + 1]
        } else {
            Vec::new()
        }
    }

    fn result(&self, _state: &usize, action: &usize) -> usize {
        *action
    }

    fn cost(&self, state: &usize, action: &usize) -> Option<f64> {
        if *action != state + 1 {
            return None;
        }
        self.costs.get(*state).copied()
    }

    fn heuristic(&self, state: &usize, goal: &usize) -> f64 {
        if state >= goal {
            return 0.0;
        }
        self.costs
            .get(*state..*goal)
            .map_or(0.0, |remaining| remaining.iter().sum())
    }
}

impl SearchWorld for Chain {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "chain"
    }
}
