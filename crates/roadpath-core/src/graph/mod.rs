//! Graph model and path-finding operations
//!
//! Provides the search engine behind roadpath:
//! - Immutable weighted graph with sorted adjacency
//! - Path reconstruction and path cost evaluation
//! - BFS, DFS and uniform-cost search producing a uniform result record

pub mod algos;
pub mod build;
pub mod path;
pub mod result;
pub mod traversal;
pub mod types;

pub use algos::{breadth_first, depth_first, run_all, uniform_cost};
pub use build::{build_graph, UndirectedEdge};
pub use path::{calculate_cost, path_edges, trace_path};
pub use result::{Algorithm, SearchResult};
pub use traversal::GraphProvider;
pub use types::{Edge, Graph, NodeId, ParentMap, PathCost};
