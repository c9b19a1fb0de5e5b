//! The callback protocol driven by depth-first search.

use crate::types::{EdgeId, VertexId};

/// Receives the events of a depth-first search.
///
/// Every method has an empty default body, so a visitor only implements the
/// events it cares about. The graph is passed read-only to each call.
pub trait DfsVisitor<G: ?Sized> {
    /// `v` was discovered and is now on the active path.
    fn vertex(&mut self, graph: &G, v: VertexId) {
        let _ = (graph, v);
    }

    /// `e` leads to an undiscovered vertex and is about to be followed.
    fn edge(&mut self, graph: &G, e: EdgeId) {
        let _ = (graph, e);
    }

    /// All edges of `v` have been examined; `v` is about to be finished.
    fn backtrack(&mut self, graph: &G, v: VertexId) {
        let _ = (graph, v);
    }

    /// `e` leads to a vertex that is already finished.
    fn closure(&mut self, graph: &G, e: EdgeId) {
        let _ = (graph, e);
    }
}

impl<G: ?Sized, V: DfsVisitor<G> + ?Sized> DfsVisitor<G> for &mut V {
    fn vertex(&mut self, graph: &G, v: VertexId) {
        (**self).vertex(graph, v);
    }

    fn edge(&mut self, graph: &G, e: EdgeId) {
        (**self).edge(graph, e);
    }

    fn backtrack(&mut self, graph: &G, v: VertexId) {
        (**self).backtrack(graph, v);
    }

    fn closure(&mut self, graph: &G, e: EdgeId) {
        (**self).closure(graph, e);
    }
}

/// A visitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopVisitor;

impl<G: ?Sized> DfsVisitor<G> for NoopVisitor {}
