use crate::graph::path::{calculate_cost, trace_path};
use crate::graph::result::{Algorithm, SearchResult};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, ParentMap, PathCost};
use std::collections::HashSet;

/// Depth-first search from `start` to `goal`.
///
/// Neighbors are pushed in reverse sorted order so the smallest id is
/// popped first. A node's parent is fixed by the first node that discovers
/// it, even if it is pushed again later. No optimality guarantee.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn depth_first(graph: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let mut stack: Vec<NodeId> = vec![start.to_string()];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parents: ParentMap = ParentMap::new();
    let mut order: Vec<NodeId> = Vec::new();

    parents.insert(start.to_string(), None);

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }

        order.push(current.clone());
        if current == goal {
            break;
        }

        for edge in graph.neighbors(&current).iter().rev() {
            if visited.contains(&edge.to) {
                continue;
            }
            parents
                .entry(edge.to.clone())
                .or_insert_with(|| Some(current.clone()));
            stack.push(edge.to.clone());
        }
    }

    let path = trace_path(&parents, start, goal);
    let cost = if path.is_empty() {
        PathCost::Unreachable
    } else {
        calculate_cost(graph, &path)
    };
    tracing::debug!(steps = order.len(), hops = path.len().saturating_sub(1), %cost, "dfs done");

    SearchResult {
        algorithm: Algorithm::Dfs,
        steps: order.len(),
        visited_order: order,
        path,
        cost,
    }
}
