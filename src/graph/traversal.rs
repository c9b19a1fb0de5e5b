//! Depth-first search with three-color edge classification.

use log::{debug, trace};

use crate::types::{EdgeId, GraphError, VertexId};

use super::{DfsVisitor, Graph};

/// Read access a graph must offer to be searched.
///
/// Vertex ids must be dense: every id below `vertex_count()` is a vertex, and roots
/// are tried in that order.
pub trait IncidenceGraph {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Edges incident to `v`, in the order they should be explored.
    fn incident_edges(&self, v: VertexId) -> &[EdgeId];

    /// The endpoint of `e` that is not `v`.
    fn opposite(&self, e: EdgeId, v: VertexId) -> VertexId;
}

impl IncidenceGraph for Graph {
    fn vertex_count(&self) -> usize {
        self.num_vertices()
    }

    fn incident_edges(&self, v: VertexId) -> &[EdgeId] {
        self.vertex(v).edges()
    }

    fn opposite(&self, e: EdgeId, v: VertexId) -> VertexId {
        self.edge(e).other(v)
    }
}

/// Traversal state of a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered and still on the active path.
    Gray,
    /// Finished.
    Black,
}

/// Per-vertex colors for one search, indexed by vertex id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    colors: Vec<Color>,
}

impl ColorMap {
    /// A map of `n` white vertices.
    pub fn new(n: usize) -> Self {
        Self {
            colors: vec![Color::White; n],
        }
    }

    /// A map sized for `graph`.
    pub fn for_graph<G: IncidenceGraph + ?Sized>(graph: &G) -> Self {
        Self::new(graph.vertex_count())
    }

    /// Color of `v`.
    pub fn get(&self, v: VertexId) -> Color {
        self.colors[v.index()]
    }

    /// Set the color of `v`.
    pub fn set(&mut self, v: VertexId, color: Color) {
        self.colors[v.index()] = color;
    }

    /// Number of vertices tracked.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True if no vertices are tracked.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Number of vertices with the given color.
    pub fn count(&self, color: Color) -> usize {
        self.colors.iter().filter(|&&c| c == color).count()
    }

    /// Reset every vertex to white.
    pub fn reset(&mut self) {
        self.colors.fill(Color::White);
    }
}

/// How `dfs_visit` walks the graph. Both produce the same callback sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsStrategy {
    /// Explicit stack of `(vertex, next edge)` frames on the heap.
    #[default]
    Iterative,
    /// One call frame per vertex on the active path. Deep graphs can overflow the
    /// thread stack.
    Recursive,
}

impl DfsStrategy {
    /// Return a human-readable name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Iterative => "iterative",
            Self::Recursive => "recursive",
        }
    }

    /// Parse a strategy from its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Iterative, Self::Recursive]
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

impl std::str::FromStr for DfsStrategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::InvalidStrategy(s.to_string()))
    }
}

impl std::fmt::Display for DfsStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DfsConfig {
    /// Walking strategy.
    pub strategy: DfsStrategy,
}

impl DfsConfig {
    /// Configuration using the given strategy.
    pub fn with_strategy(strategy: DfsStrategy) -> Self {
        Self { strategy }
    }
}

/// Search the whole graph with the default configuration.
pub fn depth_first_search<G, V>(graph: &G, visitor: &mut V)
where
    G: IncidenceGraph + ?Sized,
    V: DfsVisitor<G> + ?Sized,
{
    depth_first_search_with(graph, visitor, &DfsConfig::default());
}

/// Search the whole graph.
///
/// Every vertex still white when its turn comes, in id order, becomes the root of
/// a new tree. Each vertex is discovered and finished exactly once.
pub fn depth_first_search_with<G, V>(graph: &G, visitor: &mut V, config: &DfsConfig)
where
    G: IncidenceGraph + ?Sized,
    V: DfsVisitor<G> + ?Sized,
{
    let mut colors = ColorMap::for_graph(graph);
    let mut roots = 0usize;
    for index in 0..graph.vertex_count() {
        let v = VertexId::new(index);
        if colors.get(v) == Color::White {
            debug!("DFS root {} ({} strategy)", v, config.strategy);
            dfs_visit(graph, v, visitor, &mut colors, config.strategy);
            roots += 1;
        }
    }
    debug!(
        "DFS finished: {} vertices, {} roots",
        graph.vertex_count(),
        roots
    );
}

/// Search the tree rooted at `root`, which must be white in `colors`.
///
/// On return every vertex reachable from `root` through white vertices is black.
pub fn dfs_visit<G, V>(
    graph: &G,
    root: VertexId,
    visitor: &mut V,
    colors: &mut ColorMap,
    strategy: DfsStrategy,
) where
    G: IncidenceGraph + ?Sized,
    V: DfsVisitor<G> + ?Sized,
{
    debug_assert_eq!(colors.get(root), Color::White, "root {} already visited", root);
    match strategy {
        DfsStrategy::Iterative => visit_iterative(graph, root, visitor, colors),
        DfsStrategy::Recursive => visit_recursive(graph, root, visitor, colors),
    }
}

fn visit_recursive<G, V>(graph: &G, v: VertexId, visitor: &mut V, colors: &mut ColorMap)
where
    G: IncidenceGraph + ?Sized,
    V: DfsVisitor<G> + ?Sized,
{
    colors.set(v, Color::Gray);
    visitor.vertex(graph, v);

    for &e in graph.incident_edges(v) {
        let w = graph.opposite(e, v);
        match colors.get(w) {
            Color::White => {
                visitor.edge(graph, e);
                visit_recursive(graph, w, visitor, colors);
            }
            Color::Black => visitor.closure(graph, e),
            Color::Gray => trace!("Edge {} from {} reaches gray vertex {}", e, v, w),
        }
    }

    visitor.backtrack(graph, v);
    colors.set(v, Color::Black);
}

fn visit_iterative<G, V>(graph: &G, root: VertexId, visitor: &mut V, colors: &mut ColorMap)
where
    G: IncidenceGraph + ?Sized,
    V: DfsVisitor<G> + ?Sized,
{
    // (vertex, position of the next incident edge to examine)
    let mut stack: Vec<(VertexId, usize)> = vec![(root, 0)];
    colors.set(root, Color::Gray);
    visitor.vertex(graph, root);

    while let Some(&(v, cursor)) = stack.last() {
        let Some(&e) = graph.incident_edges(v).get(cursor) else {
            stack.pop();
            visitor.backtrack(graph, v);
            colors.set(v, Color::Black);
            continue;
        };

        let top = stack.len() - 1;
        stack[top].1 += 1;

        let w = graph.opposite(e, v);
        match colors.get(w) {
            Color::White => {
                visitor.edge(graph, e);
                colors.set(w, Color::Gray);
                visitor.vertex(graph, w);
                stack.push((w, 0));
            }
            Color::Black => visitor.closure(graph, e),
            Color::Gray => trace!("Edge {} from {} reaches gray vertex {}", e, v, w),
        }
    }
}
