use crate::graph::types::{Edge, Graph};

/// Trait for providing sorted graph adjacency to the search algorithms
pub trait GraphProvider {
    /// Outgoing edges of `id`, sorted by neighbor id; empty for unknown ids
    fn neighbors(&self, id: &str) -> &[Edge];
    fn contains(&self, id: &str) -> bool;
}

impl GraphProvider for Graph {
    fn neighbors(&self, id: &str) -> &[Edge] {
        self.edges(id)
    }

    fn contains(&self, id: &str) -> bool {
        Graph::contains(self, id)
    }
}
