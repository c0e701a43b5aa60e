//! Search node and frontier ordering key.

/// Index of a node in its tree's arena. Doubles as creation order.
pub type NodeId = usize;

/// One explored point of the search tree.
///
/// Nodes live in the owning [`crate::search::SearchTree`]'s arena and refer
/// to their parent by index. Parent links only ever point toward the root.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Arena index; assigned in creation order, root = 0.
    pub node_id: NodeId,
    /// Parent node (`None` for root).
    pub parent_id: Option<NodeId>,
    pub state: S,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Sum of action costs from the root.
    pub path_cost: f64,
    /// Domain estimate of the remaining cost, computed once at creation.
    pub heuristic: f64,
    /// The action that produced this node from its parent.
    pub incoming_action: Option<A>,
}

impl<S, A> SearchNode<S, A> {
    pub(crate) fn root(state: S, heuristic: f64) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            depth: 0,
            path_cost: 0.0,
            heuristic,
            incoming_action: None,
        }
    }

    /// `path_cost + heuristic`, the A* ordering key.
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.path_cost + self.heuristic
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Ordering key for priority-ordered frontiers: `(priority, creation_order)`.
///
/// Lower priority first; ties go to the older node. Priorities compare with
/// [`f64::total_cmp`], so the order is total even for odd inputs.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub priority: f64,
    pub creation_order: NodeId,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
