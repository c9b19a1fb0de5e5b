//! Closure edge collection.

use crate::graph::DfsVisitor;
use crate::types::EdgeId;

/// Collects the edges reported as closures.
///
/// In an undirected graph every non-tree edge except a self-loop is reported
/// exactly once, from the endpoint that finishes last. Self-loops only ever reach
/// a gray vertex and are never reported, so `has_closure` is a cycle test for
/// loop-free graphs only.
#[derive(Debug, Clone, Default)]
pub struct ClosureDetector {
    closures: Vec<EdgeId>,
}

impl ClosureDetector {
    /// Create an empty detector.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any closure edge was reported.
    pub fn has_closure(&self) -> bool {
        !self.closures.is_empty()
    }

    /// Closure edges in report order.
    pub fn closure_edges(&self) -> &[EdgeId] {
        &self.closures
    }

    /// Number of closure edges.
    pub fn count(&self) -> usize {
        self.closures.len()
    }
}

impl<G: ?Sized> DfsVisitor<G> for ClosureDetector {
    fn closure(&mut self, _graph: &G, e: EdgeId) {
        self.closures.push(e);
    }
}
