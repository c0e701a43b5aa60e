//! Strategy-ordered open set.
//!
//! Breadth-first and depth-first keep a positional queue. The three
//! priority strategies keep a min-heap keyed by [`FrontierKey`], which pops
//! in the same order a stable resort of the whole open list would.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{FrontierKey, NodeId, SearchNode};
use crate::policy::Strategy;

#[derive(Debug)]
enum OpenSet {
    Positional(VecDeque<NodeId>),
    /// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
    Ordered(BinaryHeap<Reverse<FrontierKey>>),
}

/// Open set of generated-but-not-yet-expanded nodes.
#[derive(Debug)]
pub struct Frontier {
    strategy: Strategy,
    open: OpenSet,
    high_water: usize,
}

impl Frontier {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        let open = match strategy {
            Strategy::BreadthFirst | Strategy::DepthFirst => OpenSet::Positional(VecDeque::new()),
            Strategy::UniformCost | Strategy::Greedy | Strategy::AStar => {
                OpenSet::Ordered(BinaryHeap::new())
            }
        };
        Self {
            strategy,
            open,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Merge a batch of freshly created nodes, in domain order.
    ///
    /// `batch` holds arena indices into `nodes`.
    pub fn merge<S, A>(&mut self, batch: &[NodeId], nodes: &[SearchNode<S, A>]) {
        match &mut self.open {
            OpenSet::Positional(queue) => {
                if self.strategy == Strategy::DepthFirst {
                    for &id in batch.iter().rev() {
                        queue.push_front(id);
                    }
                } else {
                    queue.extend(batch.iter().copied());
                }
            }
            OpenSet::Ordered(heap) => {
                for &id in batch {
                    let node = &nodes[id];
                    let priority = self
                        .strategy
                        .priority(node.path_cost, node.heuristic)
                        .unwrap_or_default();
                    heap.push(Reverse(FrontierKey {
                        priority,
                        creation_order: id,
                    }));
                }
            }
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove the head of the open set.
    #[must_use]
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.open {
            OpenSet::Positional(queue) => queue.pop_front(),
            OpenSet::Ordered(heap) => heap.pop().map(|Reverse(key)| key.creation_order),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.open {
            OpenSet::Positional(queue) => queue.len(),
            OpenSet::Ordered(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the open set has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
