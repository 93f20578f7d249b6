use crate::error::RoadpathError;
use crate::graph::types::{NodeId, PathCost};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Search strategy tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "BFS", alias = "bfs")]
    Bfs,
    #[default]
    #[serde(rename = "DFS", alias = "dfs")]
    Dfs,
    #[serde(rename = "UCS", alias = "ucs")]
    Ucs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs];

    /// Short display tag (`BFS`, `DFS`, `UCS`)
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Ucs => "UCS",
        }
    }

    /// One-line explanation of what the algorithm guarantees
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Bfs => {
                "BFS explores level by level and guarantees the shortest path in unweighted graphs."
            }
            Algorithm::Dfs => {
                "DFS explores depth-first and does not guarantee the shortest path."
            }
            Algorithm::Ucs => {
                "UCS expands the lowest-cost node first and guarantees the optimal (least-cost) path."
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = RoadpathError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "ucs" => Ok(Algorithm::Ucs),
            other => Err(RoadpathError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Outcome of a single search call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Nodes in the order they were expanded
    pub visited_order: Vec<NodeId>,
    /// Start-to-goal path, empty when the goal is unreachable
    pub path: Vec<NodeId>,
    /// Number of expanded nodes
    pub steps: usize,
    pub cost: PathCost,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
