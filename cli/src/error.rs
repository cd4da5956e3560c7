use astar_route_core::GraphError;
use thiserror::Error;

/// Everything that can stop a CLI run. An unreachable goal or unknown
/// endpoint is a report, not an error.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("invalid {expected}: '{token}'")]
    InvalidNumber { expected: &'static str, token: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("gave up after {limit} consecutive invalid records")]
    TooManyRetries { limit: u32 },

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}
