//! Error types for the Pregolya library.

use thiserror::Error;

/// Recoverable errors raised by the validating layers (`GraphBuilder`, CLI input).
///
/// The graph itself never returns these: its mutator treats bad indices as contract
/// violations and panics.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge endpoint does not name an existing vertex.
    #[error("Vertex index {vertex} out of range for a graph with {count} vertices")]
    VertexOutOfRange { vertex: usize, count: usize },

    /// An edge argument could not be parsed.
    #[error("Invalid edge specification: {0:?} (expected I:J or I-J)")]
    InvalidEdgeSpec(String),

    /// Unknown traversal strategy name.
    #[error("Unknown traversal strategy: {0:?} (expected iterative or recursive)")]
    InvalidStrategy(String),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for Pregolya operations.
pub type GraphResult<T> = Result<T, GraphError>;
