//! Search algorithm implementations
//!
//! - `bfs`: Breadth-first search (fewest hops)
//! - `dfs`: Depth-first search (no optimality guarantee)
//! - `ucs`: Uniform-cost search (least total cost)

pub mod bfs;
pub mod dfs;
pub mod ucs;

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use ucs::uniform_cost;

use crate::graph::result::{Algorithm, SearchResult};
use crate::graph::traversal::GraphProvider;

impl Algorithm {
    /// Run this algorithm from `start` to `goal`
    ///
    /// Unknown endpoints are searched anyway and end up unreachable.
    pub fn run(&self, graph: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
        for endpoint in [start, goal] {
            if !graph.contains(endpoint) {
                tracing::warn!(algorithm = self.tag(), endpoint, "endpoint not in graph");
            }
        }
        match self {
            Algorithm::Bfs => breadth_first(graph, start, goal),
            Algorithm::Dfs => depth_first(graph, start, goal),
            Algorithm::Ucs => uniform_cost(graph, start, goal),
        }
    }
}

/// Run every algorithm on the same query, in `Algorithm::ALL` order
pub fn run_all(graph: &dyn GraphProvider, start: &str, goal: &str) -> Vec<SearchResult> {
    Algorithm::ALL
        .iter()
        .map(|algorithm| algorithm.run(graph, start, goal))
        .collect()
}
