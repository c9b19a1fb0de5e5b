//! All data types for the Pregolya library.

pub mod edge;
pub mod error;
pub mod vertex;

use serde::Serialize;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Position of a vertex in its graph's vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Wrap a raw vertex index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index, equal to the vertex's position in `Graph::vertices()`.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an edge in its graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Wrap a raw edge index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index, equal to the edge's position in `Graph::edges()`.
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
