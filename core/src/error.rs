use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building a graph or reading back a search.
///
/// An unreachable goal is not an error; see [`crate::SearchResult::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node with this label is already registered.
    #[error("duplicate node label '{0}'")]
    DuplicateLabel(String),

    /// No node carries this label.
    #[error("unknown node label '{0}'")]
    UnknownLabel(String),

    /// A raw node id outside the graph's arena.
    #[error("unknown node id {0}")]
    UnknownNodeId(NodeId),

    /// Path requested for a goal the run did not reach.
    #[error("no recorded path to '{goal}'")]
    NoRecordedPath { goal: String },
}

pub type GraphResult<T> = Result<T, GraphError>;
