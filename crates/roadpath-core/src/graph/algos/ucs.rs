use crate::graph::path::trace_path;
use crate::graph::result::{Algorithm, SearchResult};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{NodeId, ParentMap, PathCost};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Priority-queue entry, ordered by accumulated cost then insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierEntry {
    pub node_id: NodeId,
    pub cost: u64,
    /// Insertion counter; earlier entries win ties
    pub seq: u64,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Frontier state for a single uniform-cost search
struct UcsState {
    distance: HashMap<NodeId, u64>,
    parents: ParentMap,
    finalized: HashSet<NodeId>,
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    order: Vec<NodeId>,
    next_seq: u64,
}

impl UcsState {
    fn new(start: &str) -> Self {
        let mut state = Self {
            distance: HashMap::new(),
            parents: ParentMap::new(),
            finalized: HashSet::new(),
            heap: BinaryHeap::new(),
            order: Vec::new(),
            next_seq: 0,
        };
        state.distance.insert(start.to_string(), 0);
        state.parents.insert(start.to_string(), None);
        state.push(start.to_string(), 0);
        state
    }

    fn push(&mut self, node_id: NodeId, cost: u64) {
        self.heap.push(Reverse(FrontierEntry {
            node_id,
            cost,
            seq: self.next_seq,
        }));
        self.next_seq += 1;
    }

    /// Tentative distance; missing entries are infinite
    fn distance_to(&self, id: &str) -> PathCost {
        self.distance
            .get(id)
            .map_or(PathCost::Unreachable, |d| PathCost::Finite(*d))
    }

    fn relax(&mut self, current: &str, neighbor: &str, edge_cost: u32) {
        let Some(base) = self.distance.get(current).copied() else {
            return;
        };
        let candidate = base + u64::from(edge_cost);
        if PathCost::Finite(candidate) < self.distance_to(neighbor) {
            self.distance.insert(neighbor.to_string(), candidate);
            self.parents
                .insert(neighbor.to_string(), Some(current.to_string()));
            self.push(neighbor.to_string(), candidate);
        }
    }
}

/// Uniform-cost (Dijkstra) search from `start` to `goal`.
///
/// Stale heap entries for already finalized nodes are discarded on pop.
/// The reported cost is the final distance of `goal`, or
/// [`PathCost::Unreachable`] when no path exists.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn uniform_cost(graph: &dyn GraphProvider, start: &str, goal: &str) -> SearchResult {
    let mut state = UcsState::new(start);

    while let Some(Reverse(FrontierEntry { node_id: current, .. })) = state.heap.pop() {
        if !state.finalized.insert(current.clone()) {
            continue;
        }

        state.order.push(current.clone());
        if current == goal {
            break;
        }

        for edge in graph.neighbors(&current) {
            state.relax(&current, &edge.to, edge.cost);
        }
    }

    let path = trace_path(&state.parents, start, goal);
    let cost = if path.is_empty() {
        PathCost::Unreachable
    } else {
        state.distance_to(goal)
    };
    tracing::debug!(steps = state.order.len(), hops = path.len().saturating_sub(1), %cost, "ucs done");

    SearchResult {
        algorithm: Algorithm::Ucs,
        steps: state.order.len(),
        visited_order: state.order,
        path,
        cost,
    }
}
