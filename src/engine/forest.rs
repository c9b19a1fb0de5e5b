//! Spanning forest and connected components from the tree edges of a search.

use serde::Serialize;

use crate::graph::{DfsVisitor, IncidenceGraph};
use crate::types::{EdgeId, VertexId};

/// The forest of tree edges produced by a depth-first search.
///
/// A vertex discovered right after a tree edge is a child; any other discovered
/// vertex is a root and opens a new component. Components are numbered in root
/// discovery order.
///
/// A forest can be handed to several searches. Discovering a vertex it already
/// holds means a new search has started, so the previous results are dropped
/// first. Partial searches through `dfs_visit` with a shared color map keep
/// accumulating into the same forest.
#[derive(Debug, Clone, Default)]
pub struct SpanningForest {
    roots: Vec<VertexId>,
    parent_edge: Vec<Option<EdgeId>>,
    component: Vec<Option<usize>>,
    discovery: Vec<VertexId>,
    finish: Vec<VertexId>,
    tree_edges: Vec<EdgeId>,
    pending: Option<EdgeId>,
}

/// Summary of one connected component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// The traversal root of this component.
    pub root: VertexId,
    /// Members in discovery order, starting with the root.
    pub vertices: Vec<VertexId>,
}

impl SpanningForest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Roots in discovery order.
    pub fn roots(&self) -> &[VertexId] {
        &self.roots
    }

    /// Number of trees, which is the number of connected components of a fully
    /// searched graph.
    pub fn component_count(&self) -> usize {
        self.roots.len()
    }

    /// Component number of `v`, or `None` if `v` was never discovered.
    pub fn component_of(&self, v: VertexId) -> Option<usize> {
        self.component.get(v.index()).copied().flatten()
    }

    /// The tree edge through which `v` was discovered. `None` for roots and
    /// undiscovered vertices.
    pub fn parent_edge(&self, v: VertexId) -> Option<EdgeId> {
        self.parent_edge.get(v.index()).copied().flatten()
    }

    /// The tree parent of `v`.
    pub fn parent<G>(&self, graph: &G, v: VertexId) -> Option<VertexId>
    where
        G: IncidenceGraph + ?Sized,
    {
        self.parent_edge(v).map(|e| graph.opposite(e, v))
    }

    /// Vertices in discovery order.
    pub fn discovery_order(&self) -> &[VertexId] {
        &self.discovery
    }

    /// Vertices in finish order.
    pub fn finish_order(&self) -> &[VertexId] {
        &self.finish
    }

    /// Tree edges in the order they were followed.
    pub fn tree_edges(&self) -> &[EdgeId] {
        &self.tree_edges
    }

    /// True if `u` and `v` ended up in the same tree.
    pub fn connected(&self, u: VertexId, v: VertexId) -> bool {
        match (self.component_of(u), self.component_of(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Members of every component, grouped by component number.
    pub fn components(&self) -> Vec<Component> {
        let mut components: Vec<Component> = self
            .roots
            .iter()
            .map(|&root| Component {
                root,
                vertices: Vec::new(),
            })
            .collect();
        for &v in &self.discovery {
            if let Some(c) = self.component_of(v) {
                components[c].vertices.push(v);
            }
        }
        components
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.roots.clear();
        self.parent_edge.clear();
        self.component.clear();
        self.discovery.clear();
        self.finish.clear();
        self.tree_edges.clear();
        self.pending = None;
    }

    fn slot(&mut self, v: VertexId) -> usize {
        let index = v.index();
        if index >= self.parent_edge.len() {
            self.parent_edge.resize(index + 1, None);
            self.component.resize(index + 1, None);
        }
        index
    }
}

impl<G: ?Sized> DfsVisitor<G> for SpanningForest {
    fn vertex(&mut self, _graph: &G, v: VertexId) {
        if self.component_of(v).is_some() {
            self.clear();
        }
        let index = self.slot(v);
        match self.pending.take() {
            Some(e) => {
                self.parent_edge[index] = Some(e);
            }
            None => self.roots.push(v),
        }
        self.component[index] = Some(self.roots.len() - 1);
        self.discovery.push(v);
    }

    fn edge(&mut self, _graph: &G, e: EdgeId) {
        self.tree_edges.push(e);
        self.pending = Some(e);
    }

    fn backtrack(&mut self, _graph: &G, v: VertexId) {
        self.finish.push(v);
    }
}
