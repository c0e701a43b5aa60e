//! Search domain contract and problem definition.

use std::fmt::Debug;

/// Trait for state spaces that support search.
///
/// A domain owns everything problem-specific: which actions exist in a
/// state, where they lead, what they cost, and how far a state is from a
/// goal. The engine treats `State` and `Action` as opaque tokens; it only
/// compares states for equality and hands actions back to the domain.
///
/// # Contract
///
/// - `actions` must be a pure function of `state` (and the domain's fixed
///   configuration). Same state → same actions in the same order.
/// - `result` and `cost` are only called with an action that `actions`
///   returned for that same state.
/// - `cost` returning `None` marks the pair as inapplicable; the engine
///   skips the child instead of failing.
/// - `heuristic` must be non-negative and zero when `state` satisfies
///   `goal`. A* only returns least-cost paths when it never overestimates.
/// - Costs are expected to be non-negative. This is not checked.
pub trait SearchDomain {
    /// A point in the state space.
    type State: Clone + PartialEq + Debug;
    /// A transition token produced by [`SearchDomain::actions`].
    type Action: Clone + Debug;

    /// All actions applicable in `state`. Empty for a dead end.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state produced by applying `action` to `state`.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Marginal cost of `action` from `state`, or `None` if inapplicable.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> Option<f64>;

    /// Estimated remaining cost from `state` to `goal`.
    fn heuristic(&self, state: &Self::State, goal: &Self::State) -> f64;

    /// Goal test. Exact equality unless the domain defines broader
    /// satisfaction.
    fn satisfies(&self, state: &Self::State, goal: &Self::State) -> bool {
        state == goal
    }
}

/// One search instance: a domain plus an `(initial, goal)` pair.
///
/// Immutable for the lifetime of every tree built over it.
#[derive(Debug)]
pub struct SearchProblem<'d, D: SearchDomain> {
    domain: &'d D,
    initial: D::State,
    goal: D::State,
}

impl<'d, D: SearchDomain> SearchProblem<'d, D> {
    #[must_use]
    pub fn new(domain: &'d D, initial: D::State, goal: D::State) -> Self {
        Self {
            domain,
            initial,
            goal,
        }
    }

    #[must_use]
    pub fn domain(&self) -> &'d D {
        self.domain
    }

    #[must_use]
    pub fn initial(&self) -> &D::State {
        &self.initial
    }

    #[must_use]
    pub fn goal(&self) -> &D::State {
        &self.goal
    }

    /// Whether `state` satisfies this problem's goal.
    #[must_use]
    pub fn goal_test(&self, state: &D::State) -> bool {
        self.domain.satisfies(state, &self.goal)
    }
}
