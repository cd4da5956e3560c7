//! astar-route-core: single-source, single-goal A* over a directed, weighted graph.
//!
//! A pure Rust library: an immutable graph model, a heap-backed open/closed
//! frontier with a stable tie-break, the A* search driver, and path
//! reconstruction from per-run predecessor links. No I/O.
//!
//! Heuristics and edge weights are taken as given. Non-negative weights are a
//! precondition, and the result is optimal only for an admissible, consistent
//! heuristic.

mod error;
mod frontier;
mod graph;
mod path;
mod search;

pub use error::{GraphError, GraphResult};
pub use frontier::NodeStatus;
pub use graph::{Edge, EdgeRecord, Graph, NodeId, NodeInfo};
pub use path::PathStep;
pub use search::{search, search_ids, SearchResult, SearchRun};
