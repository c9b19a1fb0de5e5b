//! The core edge struct.

use super::{EdgeId, VertexId};

/// An undirected edge between two vertices of the same graph.
///
/// `source` and `target` only record the order the endpoints were given in when
/// the edge was added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    id: EdgeId,
    source: VertexId,
    target: VertexId,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, source: VertexId, target: VertexId) -> Self {
        Self { id, source, target }
    }

    /// The edge id.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The raw index of this edge.
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// First endpoint, as given to `add_edge`.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Second endpoint, as given to `add_edge`.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// The endpoint opposite to `v`.
    ///
    /// `v` must be one of the endpoints. This is only checked in debug builds;
    /// in release builds a non-endpoint yields `source`.
    pub fn other(&self, v: VertexId) -> VertexId {
        debug_assert!(
            v == self.source || v == self.target,
            "vertex {} is not an endpoint of edge {}",
            v,
            self.id
        );
        if v == self.source {
            self.target
        } else {
            self.source
        }
    }

    /// True when both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
