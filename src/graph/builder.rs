//! Graph construction: the unchecked mutator and the validating fluent builder.

use log::debug;

use crate::types::{Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};

use super::Graph;

/// The only handle through which a [`Graph`] grows.
///
/// Index arguments are trusted: an out-of-range vertex is a contract violation and
/// panics. Validate untrusted input with [`GraphBuilder`] first.
pub struct GraphMutator<'g> {
    graph: &'g mut Graph,
}

impl<'g> GraphMutator<'g> {
    pub(super) fn new(graph: &'g mut Graph) -> Self {
        Self { graph }
    }

    /// Create `n` vertices, then one edge for each `(i, j)` pair in order.
    ///
    /// Pair components index the graph's vertex list and must be `< n`.
    ///
    /// # Panics
    ///
    /// Panics if a pair component is `>= n`.
    pub fn construct(&mut self, n: usize, pairs: &[(usize, usize)]) {
        self.graph.vertices.reserve(n);
        self.graph.edges.reserve(pairs.len());
        for _ in 0..n {
            self.add_vertex();
        }
        for &(i, j) in pairs {
            assert!(
                i < n && j < n,
                "edge ({}, {}) out of range for {} vertices",
                i,
                j,
                n
            );
            self.add_edge(VertexId::new(i), VertexId::new(j));
        }
        debug!(
            "Constructed graph: {} vertices, {} edges",
            self.graph.num_vertices(),
            self.graph.num_edges()
        );
    }

    /// Append a vertex. Its id is the previous vertex count.
    pub fn add_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.graph.vertices.len());
        self.graph.vertices.push(Vertex::new(id));
        id
    }

    /// Append an edge and attach it to the source's edge list, then the target's.
    ///
    /// A self-loop is therefore attached to its vertex twice.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of the graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> EdgeId {
        let count = self.graph.vertices.len();
        assert!(
            source.index() < count && target.index() < count,
            "edge ({}, {}) out of range for {} vertices",
            source,
            target,
            count
        );

        let id = EdgeId::new(self.graph.edges.len());
        self.graph.edges.push(Edge::new(id, source, target));
        self.graph.vertices[source.index()].attach(id);
        self.graph.vertices[target.index()].attach(id);
        id
    }
}

/// Fluent builder for constructing a [`Graph`] from untrusted input.
///
/// Nothing is checked until [`GraphBuilder::build`], which rejects the first link
/// with an endpoint outside the vertex range.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    vertex_count: usize,
    links: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a new builder with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with `n` vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            vertex_count: n,
            links: Vec::new(),
        }
    }

    /// Add a vertex, returning the index it will have in the built graph.
    pub fn add_vertex(&mut self) -> usize {
        let index = self.vertex_count;
        self.vertex_count += 1;
        index
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, source: usize, target: usize) -> &mut Self {
        self.links.push((source, target));
        self
    }

    /// Add several edges in order.
    pub fn links<I>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        self.links.extend(pairs);
        self
    }

    /// Number of vertices the built graph will have.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges the built graph will have.
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Validate all links and build the final graph.
    pub fn build(self) -> GraphResult<Graph> {
        let count = self.vertex_count;
        for &(i, j) in &self.links {
            for vertex in [i, j] {
                if vertex >= count {
                    return Err(GraphError::VertexOutOfRange { vertex, count });
                }
            }
        }
        Ok(Graph::from_edges(count, &self.links))
    }
}
