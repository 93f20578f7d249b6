use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Opaque city identifier
pub type NodeId = String;

/// Parent pointers recorded during a traversal.
/// `None` marks the traversal root.
pub type ParentMap = HashMap<NodeId, Option<NodeId>>;

/// Outgoing adjacency record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub to: NodeId,
    pub cost: u32,
}

impl Edge {
    /// Create an edge; costs below 1 are clamped to 1
    pub fn new(to: impl Into<NodeId>, cost: u32) -> Self {
        Edge {
            to: to.into(),
            cost: cost.max(1),
        }
    }
}

/// Total cost of a path.
///
/// `Unreachable` plays the role of positive infinity: it orders after every
/// finite cost and is what searches report when no path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathCost {
    Finite(u64),
    Unreachable,
}

impl PathCost {
    pub const ZERO: PathCost = PathCost::Finite(0);

    pub fn is_finite(&self) -> bool {
        matches!(self, PathCost::Finite(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            PathCost::Finite(v) => Some(*v),
            PathCost::Unreachable => None,
        }
    }
}

impl Default for PathCost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<u64> for PathCost {
    fn from(cost: u64) -> Self {
        PathCost::Finite(cost)
    }
}

impl std::ops::Add<u32> for PathCost {
    type Output = Self;

    fn add(self, edge_cost: u32) -> Self {
        match self {
            PathCost::Finite(v) => PathCost::Finite(v + u64::from(edge_cost)),
            PathCost::Unreachable => PathCost::Unreachable,
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Finite(v) => write!(f, "{}", v),
            PathCost::Unreachable => write!(f, "∞"),
        }
    }
}

impl Serialize for PathCost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathCost::Finite(v) => serializer.serialize_u64(*v),
            PathCost::Unreachable => serializer.serialize_none(),
        }
    }
}

/// Immutable weighted undirected graph.
///
/// Every node's adjacency list is sorted by neighbor id, so all traversals
/// see neighbors in the same order on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub(crate) adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl Graph {
    /// Outgoing edges of `id`, empty for unknown nodes
    pub fn edges(&self, id: &str) -> &[Edge] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Node ids in ascending order
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected connections (each stored twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// First edge from `from` to `to`, if any
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edges(from).iter().find(|e| e.to == to)
    }
}
