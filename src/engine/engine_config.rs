/// The default maximal number of candidate sets explored when enumerating extensions.
pub const DEFAULT_MAX_CANDIDATE_SETS: usize = 1_000_000;

/// The default maximal number of nodes of a single dispute tree.
pub const DEFAULT_MAX_DISPUTE_TREE_NODES: usize = 100_000;

/// The search bounds of a [SemanticsEngine](crate::engine::SemanticsEngine).
///
/// Enumerating the extensions of a framework and building dispute trees may take exponential time.
/// Instead of running for hours, the engine gives up with a [`SearchBudgetExceeded`](crate::error::EngineError::SearchBudgetExceeded) error
/// as soon as the candidate set bound is hit,
/// and stops expanding a dispute tree as soon as it reaches the node bound.
///
/// # Example
///
/// ```
/// # use argprov::engine::EngineConfig;
/// let config = EngineConfig::default().with_max_candidate_sets(1000);
/// assert_eq!(1000, config.max_candidate_sets());
/// assert_eq!(100_000, config.max_dispute_tree_nodes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_candidate_sets: usize,
    max_dispute_tree_nodes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_candidate_sets: DEFAULT_MAX_CANDIDATE_SETS,
            max_dispute_tree_nodes: DEFAULT_MAX_DISPUTE_TREE_NODES,
        }
    }
}

impl EngineConfig {
    /// Sets the maximal number of candidate sets explored by the complete, preferred and stable solvers.
    pub fn with_max_candidate_sets(mut self, max_candidate_sets: usize) -> Self {
        self.max_candidate_sets = max_candidate_sets;
        self
    }

    /// Sets the maximal number of nodes of each dispute tree.
    pub fn with_max_dispute_tree_nodes(mut self, max_dispute_tree_nodes: usize) -> Self {
        self.max_dispute_tree_nodes = max_dispute_tree_nodes;
        self
    }

    /// Returns the maximal number of candidate sets explored by the search-based solvers.
    pub fn max_candidate_sets(&self) -> usize {
        self.max_candidate_sets
    }

    /// Returns the maximal number of nodes of each dispute tree.
    pub fn max_dispute_tree_nodes(&self) -> usize {
        self.max_dispute_tree_nodes
    }
}
