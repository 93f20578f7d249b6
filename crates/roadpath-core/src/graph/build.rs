//! Graph construction from a node list and undirected weighted connections

use crate::graph::types::{Edge, Graph, NodeId};
use std::collections::BTreeMap;

/// An undirected connection between two nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedEdge {
    pub a: NodeId,
    pub b: NodeId,
    pub cost: u32,
}

impl UndirectedEdge {
    pub fn new(a: impl Into<NodeId>, b: impl Into<NodeId>, cost: u32) -> Self {
        UndirectedEdge {
            a: a.into(),
            b: b.into(),
            cost,
        }
    }
}

/// Build a graph from `nodes` and undirected `edges`.
///
/// Each connection is stored as `a -> b` and `b -> a` with the same cost.
/// Adjacency lists are then sorted by neighbor id (stable, so parallel
/// duplicates keep insertion order). Ids compare by bytes, not by locale:
/// every uppercase ASCII letter sorts before every lowercase one, so
/// `"Abd"` comes before `"abc"`. Endpoints missing from `nodes` are
/// added as nodes rather than rejected.
pub fn build_graph<I, S>(nodes: I, edges: &[UndirectedEdge]) -> Graph
where
    I: IntoIterator<Item = S>,
    S: Into<NodeId>,
{
    let mut adjacency: BTreeMap<NodeId, Vec<Edge>> = BTreeMap::new();
    for node in nodes {
        adjacency.entry(node.into()).or_default();
    }

    for edge in edges {
        if !adjacency.contains_key(&edge.a) || !adjacency.contains_key(&edge.b) {
            tracing::warn!(a = %edge.a, b = %edge.b, "edge endpoint not in node list");
        }
        adjacency
            .entry(edge.a.clone())
            .or_default()
            .push(Edge::new(edge.b.clone(), edge.cost));
        adjacency
            .entry(edge.b.clone())
            .or_default()
            .push(Edge::new(edge.a.clone(), edge.cost));
    }

    for neighbors in adjacency.values_mut() {
        neighbors.sort_by(|x, y| x.to.cmp(&y.to));
    }

    tracing::debug!(
        nodes = adjacency.len(),
        connections = edges.len(),
        "graph built"
    );

    Graph { adjacency }
}
