//! The vertex struct.

use super::{EdgeId, VertexId};

/// A vertex owned by a `Graph`.
///
/// Holds the ids of its incident edges in the order they were attached. A self-loop
/// is attached twice, so it counts twice towards the degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: VertexId,
    edges: Vec<EdgeId>,
}

impl Vertex {
    pub(crate) fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }

    /// The vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The raw index of this vertex.
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// Number of incidences (a self-loop counts twice).
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Incident edges in attachment order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }
}
