//! Pregolya — an append-only undirected graph with a visitor-driven depth-first search.
//!
//! Vertices and edges live in index-addressed arenas owned by the [`Graph`]. The
//! search colors vertices white, gray and black and classifies each examined edge as
//! a tree edge or a closure edge, reporting both through a [`DfsVisitor`].

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    closure_edges, connected_components, discovery_order, record_events, ClosureDetector,
    Component, EventRecorder, SpanningForest, TraversalEvent,
};
pub use graph::{
    depth_first_search, depth_first_search_with, dfs_visit, Color, ColorMap, DfsConfig,
    DfsStrategy, DfsVisitor, Graph, GraphBuilder, GraphMutator, IncidenceGraph, Neighbors,
    NoopVisitor,
};
pub use types::{Edge, EdgeId, GraphError, GraphResult, Vertex, VertexId};
