//! Core graph structure — vertex and edge arenas addressed by index.

use std::iter::FusedIterator;

use crate::types::{Edge, EdgeId, GraphResult, Vertex, VertexId};

use super::{GraphBuilder, GraphMutator};

/// An append-only undirected graph.
///
/// Vertices and edges live in two contiguous vectors and refer to each other by
/// index. Ids are dense, start at zero and always equal the position in
/// `vertices()` / `edges()`. The only way to grow a graph is through
/// [`Graph::mutator`]; nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// All vertices, indexed by id.
    pub(super) vertices: Vec<Vertex>,
    /// All edges, indexed by id.
    pub(super) edges: Vec<Edge>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for the given number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Build a graph with `n` vertices and one edge per pair.
    ///
    /// # Panics
    ///
    /// Panics if any pair names a vertex `>= n`. Use [`Graph::try_from_edges`] for
    /// untrusted input.
    pub fn from_edges(n: usize, pairs: &[(usize, usize)]) -> Self {
        let mut graph = Self::with_capacity(n, pairs.len());
        graph.mutator().construct(n, pairs);
        graph
    }

    /// Checked counterpart of [`Graph::from_edges`].
    pub fn try_from_edges(n: usize, pairs: &[(usize, usize)]) -> GraphResult<Self> {
        let mut builder = GraphBuilder::with_vertices(n);
        builder.links(pairs.iter().copied());
        builder.build()
    }

    /// Borrow the graph for mutation. The borrow keeps traversals out until the
    /// mutator is dropped.
    pub fn mutator(&mut self) -> GraphMutator<'_> {
        GraphMutator::new(self)
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// All vertices in creation order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All edges in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a vertex by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a vertex of this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Get an edge by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an edge of this graph.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Get a vertex by id, or `None` if out of range.
    pub fn get_vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Get an edge by id, or `None` if out of range.
    pub fn get_edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// Degree of `v`.
    pub fn degree(&self, v: VertexId) -> usize {
        self.vertex(v).degree()
    }

    /// Neighbors of `v`, one per incident edge, in edge-list order.
    ///
    /// A self-loop yields `v` twice and parallel edges yield the same neighbor
    /// once per edge.
    pub fn neighbors(&self, v: VertexId) -> Neighbors<'_> {
        Neighbors {
            graph: self,
            vertex: v,
            edges: self.vertex(v).edges().iter(),
        }
    }

    /// True if some edge incident to `v` has `w` as its other endpoint.
    ///
    /// O(degree(v)).
    pub fn is_adjacent(&self, v: VertexId, w: VertexId) -> bool {
        self.neighbors(v).any(|n| n == w)
    }
}

/// Iterator over the neighbors of a vertex. Created by [`Graph::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'g> {
    graph: &'g Graph,
    vertex: VertexId,
    edges: std::slice::Iter<'g, EdgeId>,
}

impl Iterator for Neighbors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let &e = self.edges.next()?;
        Some(self.graph.edge(e).other(self.vertex))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

impl FusedIterator for Neighbors<'_> {}
