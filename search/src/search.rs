//! Search tree and expansion loop.

use crate::contract::{SearchDomain, SearchProblem};
use crate::frontier::Frontier;
use crate::graph::{
    ChildOutcome, ChildRecord, ExpandEvent, NodeSummary, SearchGraph, SearchGraphMetadata,
    TerminationReason,
};
use crate::node::{NodeId, SearchNode};
use crate::policy::{SearchPolicy, Strategy};

type NodeOf<D> = SearchNode<<D as SearchDomain>::State, <D as SearchDomain>::Action>;

/// Where a tree is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// `search` has not finished yet.
    Pending,
    /// A popped node satisfied the goal.
    Solved { node_id: NodeId },
    /// The open set emptied without a goal.
    Exhausted,
}

/// Diagnostic counters for a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal node excluded).
    pub non_terminals: u64,
    /// Open-set size plus one.
    pub terminals: u64,
    /// `(non_terminals + terminals - 1) / non_terminals`; `None` before any
    /// expansion.
    pub avg_branching: Option<f64>,
    /// Sum of the depths of all created nodes over
    /// `terminals + non_terminals`.
    pub average_depth: f64,
    /// Nodes sharing the highest `path_cost` created so far.
    pub highest_cost_nodes: Vec<NodeId>,
}

/// A packaged successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S, A> {
    /// Root-to-goal states, both ends included.
    pub path: Vec<S>,
    /// Actions taken from the root to the goal.
    pub plan: Vec<A>,
    pub cost: f64,
    pub depth: u32,
}

/// The tree built by one search over a [`SearchProblem`].
///
/// Owns every node it creates in an arena; parent links are arena
/// indices. Build a fresh tree per search and drop it when done. A tree
/// left `Pending` by a panicking domain must not be reused.
pub struct SearchTree<'p, 'd, D: SearchDomain> {
    problem: &'p SearchProblem<'d, D>,
    strategy: Strategy,
    nodes: Vec<NodeOf<D>>,
    frontier: Frontier,
    outcome: Outcome,
    depth_limit: Option<u32>,
    non_terminals: u64,
    depth_sum: u64,
    highest_cost_nodes: Vec<NodeId>,
    expansions: Vec<ExpandEvent>,
    expansion_order: Vec<Option<u64>>,
    cycles_rejected: u64,
    depth_limited: u64,
    inapplicable: u64,
}

impl<'p, 'd, D: SearchDomain> SearchTree<'p, 'd, D> {
    /// Create a tree whose open set holds just the root.
    #[must_use]
    pub fn new(problem: &'p SearchProblem<'d, D>, strategy: Strategy) -> Self {
        let domain = problem.domain();
        let heuristic = domain.heuristic(problem.initial(), problem.goal());
        let root = SearchNode::root(problem.initial().clone(), heuristic);

        let nodes = vec![root];
        let mut frontier = Frontier::new(strategy);
        frontier.merge(&[0], &nodes);

        Self {
            problem,
            strategy,
            nodes,
            frontier,
            outcome: Outcome::Pending,
            depth_limit: None,
            non_terminals: 0,
            depth_sum: 0,
            highest_cost_nodes: vec![0],
            expansions: Vec::new(),
            expansion_order: vec![None],
            cycles_rejected: 0,
            depth_limited: 0,
            inapplicable: 0,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// All nodes created so far, indexed by `node_id`.
    #[must_use]
    pub fn nodes(&self) -> &[NodeOf<D>] {
        &self.nodes
    }

    #[must_use]
    pub fn node(&self, node_id: NodeId) -> Option<&NodeOf<D>> {
        self.nodes.get(node_id)
    }

    /// Run the expansion loop to completion.
    ///
    /// Returns the root-to-goal states (both ends included), or `None` if
    /// the open set is exhausted. A tree that already finished returns its
    /// recorded outcome again without searching.
    ///
    /// Nodes at `depth_limit` are not expanded. Without a limit, a search
    /// over an infinite space with an unreachable goal does not terminate.
    pub fn search(&mut self, depth_limit: Option<u32>) -> Option<Vec<D::State>> {
        match self.outcome {
            Outcome::Solved { node_id } => return Some(self.path_to(node_id)),
            Outcome::Exhausted => return None,
            Outcome::Pending => {}
        }
        self.depth_limit = depth_limit;

        while let Some(node_id) = self.frontier.pop() {
            let order = self.expansions.len() as u64;
            self.expansion_order[node_id] = Some(order);

            let node = &self.nodes[node_id];
            log::trace!(
                "pop node={node_id} state={:?} cost={} heuristic={} depth={} action={:?}",
                node.state,
                node.path_cost,
                node.heuristic,
                node.depth,
                node.incoming_action,
            );

            if self.problem.goal_test(&node.state) {
                self.expansions.push(ExpandEvent {
                    expansion_order: order,
                    node_id,
                    depth: node.depth,
                    path_cost: node.path_cost,
                    heuristic: node.heuristic,
                    is_goal: true,
                    children: Vec::new(),
                });
                self.outcome = Outcome::Solved { node_id };
                log::debug!(
                    "{} search solved: depth={} cost={} expansions={} nodes={}",
                    self.strategy,
                    node.depth,
                    node.path_cost,
                    self.non_terminals,
                    self.nodes.len(),
                );
                return Some(self.path_to(node_id));
            }

            self.non_terminals += 1;
            let (batch, children) = self.expand(node_id);
            self.frontier.merge(&batch, &self.nodes);

            let node = &self.nodes[node_id];
            self.expansions.push(ExpandEvent {
                expansion_order: order,
                node_id,
                depth: node.depth,
                path_cost: node.path_cost,
                heuristic: node.heuristic,
                is_goal: false,
                children,
            });
        }

        self.outcome = Outcome::Exhausted;
        log::debug!(
            "{} search exhausted: expansions={} nodes={}",
            self.strategy,
            self.non_terminals,
            self.nodes.len(),
        );
        None
    }

    /// Generate the children of `node_id`, appending them to the arena.
    ///
    /// Returns the new node ids in domain order plus one record per action.
    fn expand(&mut self, node_id: NodeId) -> (Vec<NodeId>, Vec<ChildRecord>) {
        let problem = self.problem;
        let domain = problem.domain();
        let goal = problem.goal();
        let actions = domain.actions(&self.nodes[node_id].state);

        let mut batch = Vec::new();
        let mut children = Vec::with_capacity(actions.len());

        for (index, action) in actions.into_iter().enumerate() {
            let parent = &self.nodes[node_id];
            let new_state = domain.result(&parent.state, &action);

            let outcome = if self.on_path(node_id, &new_state) {
                self.cycles_rejected += 1;
                ChildOutcome::CycleRejected
            } else if self.depth_limit.is_some_and(|limit| parent.depth >= limit) {
                self.depth_limited += 1;
                ChildOutcome::SkippedByDepthLimit
            } else if let Some(edge_cost) = domain.cost(&parent.state, &action) {
                let child = SearchNode {
                    node_id: self.nodes.len(),
                    parent_id: Some(node_id),
                    heuristic: domain.heuristic(&new_state, goal),
                    state: new_state,
                    depth: parent.depth + 1,
                    path_cost: parent.path_cost + edge_cost,
                    incoming_action: Some(action),
                };
                let child_id = child.node_id;
                self.record_created(&child);
                self.nodes.push(child);
                self.expansion_order.push(None);
                batch.push(child_id);
                ChildOutcome::Applied { to_node: child_id }
            } else {
                self.inapplicable += 1;
                ChildOutcome::Inapplicable
            };

            children.push(ChildRecord {
                index: index as u64,
                outcome,
            });
        }

        (batch, children)
    }

    /// Whether `state` equals the state of `node_id` or of any ancestor.
    fn on_path(&self, node_id: NodeId, state: &D::State) -> bool {
        let mut current = Some(node_id);
        while let Some(id) = current {
            let node = &self.nodes[id];
            if node.state == *state {
                return true;
            }
            current = node.parent_id;
        }
        false
    }

    fn record_created(&mut self, child: &NodeOf<D>) {
        self.depth_sum += u64::from(child.depth);

        let highest = self.nodes[self.highest_cost_nodes[0]].path_cost;
        if child.path_cost > highest {
            self.highest_cost_nodes.clear();
            self.highest_cost_nodes.push(child.node_id);
        } else if child.path_cost == highest {
            self.highest_cost_nodes.push(child.node_id);
        }
    }

    /// Node ids from the root to `node_id`, both ends included.
    fn lineage(&self, node_id: NodeId) -> Vec<NodeId> {
        let mut ids = Vec::new();
        let mut current = Some(node_id);
        while let Some(id) = current {
            ids.push(id);
            current = self.nodes[id].parent_id;
        }
        ids.reverse();
        ids
    }

    /// Root-to-node states, both ends included.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` is not a node of this tree.
    #[must_use]
    pub fn path_to(&self, node_id: NodeId) -> Vec<D::State> {
        self.lineage(node_id)
            .into_iter()
            .map(|id| self.nodes[id].state.clone())
            .collect()
    }

    /// Actions taken from the root to reach `node_id`.
    ///
    /// # Panics
    ///
    /// Panics if `node_id` is not a node of this tree.
    #[must_use]
    pub fn plan_to(&self, node_id: NodeId) -> Vec<D::Action> {
        self.lineage(node_id)
            .into_iter()
            .filter_map(|id| self.nodes[id].incoming_action.clone())
            .collect()
    }

    /// The solution node, once solved.
    #[must_use]
    pub fn solution(&self) -> Option<&NodeOf<D>> {
        match self.outcome {
            Outcome::Solved { node_id } => self.nodes.get(node_id),
            Outcome::Pending | Outcome::Exhausted => None,
        }
    }

    #[must_use]
    pub fn solution_cost(&self) -> Option<f64> {
        self.solution().map(|n| n.path_cost)
    }

    #[must_use]
    pub fn solution_depth(&self) -> Option<u32> {
        self.solution().map(|n| n.depth)
    }

    #[must_use]
    pub fn solution_path(&self) -> Option<Vec<D::State>> {
        self.solution().map(|n| self.path_to(n.node_id))
    }

    #[must_use]
    pub fn solution_plan(&self) -> Option<Vec<D::Action>> {
        self.solution().map(|n| self.plan_to(n.node_id))
    }

    /// Package the solution, once solved.
    #[must_use]
    pub fn to_solution(&self) -> Option<Solution<D::State, D::Action>> {
        self.solution().map(|n| Solution {
            path: self.path_to(n.node_id),
            plan: self.plan_to(n.node_id),
            cost: n.path_cost,
            depth: n.depth,
        })
    }

    /// Diagnostic counters.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> SearchStats {
        let terminals = self.frontier.len() as u64 + 1;
        let avg_branching = (self.non_terminals > 0).then(|| {
            (self.non_terminals + terminals - 1) as f64 / self.non_terminals as f64
        });
        SearchStats {
            non_terminals: self.non_terminals,
            terminals,
            avg_branching,
            average_depth: self.depth_sum as f64 / (terminals + self.non_terminals) as f64,
            highest_cost_nodes: self.highest_cost_nodes.clone(),
        }
    }

    /// Snapshot of the expansion log.
    #[must_use]
    pub fn graph(&self) -> SearchGraph {
        let solved_id = match self.outcome {
            Outcome::Solved { node_id } => Some(node_id),
            Outcome::Pending | Outcome::Exhausted => None,
        };
        let node_summaries = self
            .nodes
            .iter()
            .map(|n| NodeSummary {
                node_id: n.node_id,
                parent_id: n.parent_id,
                depth: n.depth,
                path_cost: n.path_cost,
                heuristic: n.heuristic,
                expansion_order: self.expansion_order[n.node_id],
                is_goal: solved_id == Some(n.node_id),
            })
            .collect();

        let termination_reason = match self.outcome {
            Outcome::Solved { node_id } => TerminationReason::GoalReached { node_id },
            Outcome::Exhausted => TerminationReason::FrontierExhausted,
            Outcome::Pending => TerminationReason::Incomplete,
        };

        SearchGraph {
            expansions: self.expansions.clone(),
            node_summaries,
            metadata: SearchGraphMetadata {
                policy: SearchPolicy {
                    strategy: self.strategy,
                    depth_limit: self.depth_limit,
                },
                total_expansions: self.expansions.len() as u64,
                total_nodes_created: self.nodes.len() as u64,
                total_cycles_rejected: self.cycles_rejected,
                total_depth_limited: self.depth_limited,
                total_inapplicable: self.inapplicable,
                frontier_high_water: self.frontier.high_water() as u64,
                termination_reason,
            },
        }
    }
}

/// Run one search with a fresh tree and package the result.
#[must_use]
pub fn solve<D: SearchDomain>(
    problem: &SearchProblem<'_, D>,
    policy: &SearchPolicy,
) -> Option<Solution<D::State, D::Action>> {
    let mut tree = SearchTree::new(problem, policy.strategy);
    tree.search(policy.depth_limit)?;
    tree.to_solution()
}
