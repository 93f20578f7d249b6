//! Path reconstruction and path cost evaluation

use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, ParentMap, PathCost};
use std::collections::HashSet;

/// Rebuild the `source -> target` path from parent pointers.
///
/// Walks back from `target` until a node without a parent. The chain is
/// only accepted when it starts at `source`; otherwise (target never
/// reached, or a chain rooted elsewhere) the result is empty. A parent
/// cycle also yields an empty path.
pub fn trace_path(parents: &ParentMap, source: &str, target: &str) -> Vec<NodeId> {
    let mut chain: Vec<NodeId> = Vec::new();
    let mut current = Some(target.to_string());

    while let Some(node) = current {
        if chain.len() > parents.len() {
            tracing::warn!(target = %target, "parent cycle while tracing path");
            return Vec::new();
        }
        current = parents.get(&node).cloned().flatten();
        chain.push(node);
    }

    chain.reverse();
    if chain.first().map(String::as_str) == Some(source) {
        chain
    } else {
        Vec::new()
    }
}

/// Sum the edge costs along `path`.
///
/// Returns [`PathCost::Unreachable`] as soon as a consecutive pair has no
/// edge between them. Paths of zero or one node cost nothing.
pub fn calculate_cost(graph: &dyn GraphProvider, path: &[NodeId]) -> PathCost {
    let mut total = PathCost::ZERO;
    for pair in path.windows(2) {
        match graph.neighbors(&pair[0]).iter().find(|e| e.to == pair[1]) {
            Some(edge) => total = total + edge.cost,
            None => return PathCost::Unreachable,
        }
    }
    total
}

/// Edges traversed by `path`, in both orientations
pub fn path_edges(path: &[NodeId]) -> HashSet<(NodeId, NodeId)> {
    let mut edges = HashSet::new();
    for pair in path.windows(2) {
        edges.insert((pair[0].clone(), pair[1].clone()));
        edges.insert((pair[1].clone(), pair[0].clone()));
    }
    edges
}
