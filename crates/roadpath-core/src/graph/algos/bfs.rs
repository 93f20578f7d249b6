use crate::graph::path::{calculate_cost, trace_path};
use crate::graph::result::{Algorithm, SearchResult};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, ParentMap, PathCost};
use std::collections::{HashSet, VecDeque};

/// Breadth-first search from `start` to `goal`.
///
/// Edge costs are ignored when choosing the expansion order, so the path
/// found has the fewest hops. The reported cost is the weighted cost of
/// that path, which need not be the cheapest one.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn breadth_first(graph: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parents: ParentMap = ParentMap::new();
    let mut order: Vec<NodeId> = Vec::new();

    queue.push_back(start.to_string());
    visited.insert(start.to_string());
    parents.insert(start.to_string(), None);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        if current == goal {
            break;
        }

        for edge in graph.neighbors(&current) {
            if visited.insert(edge.to.clone()) {
                parents.insert(edge.to.clone(), Some(current.clone()));
                queue.push_back(edge.to.clone());
            }
        }
    }

    let path = trace_path(&parents, start, goal);
    let cost = if path.is_empty() {
        PathCost::Unreachable
    } else {
        calculate_cost(graph, &path)
    };
    tracing::debug!(steps = order.len(), hops = path.len().saturating_sub(1), %cost, "bfs done");

    SearchResult {
        algorithm: Algorithm::Bfs,
        steps: order.len(),
        visited_order: order,
        path,
        cost,
    }
}
