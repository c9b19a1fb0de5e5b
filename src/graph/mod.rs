//! In-memory graph and depth-first search — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;
pub mod visitor;

pub use builder::{GraphBuilder, GraphMutator};
pub use traversal::{
    depth_first_search, depth_first_search_with, dfs_visit, Color, ColorMap, DfsConfig,
    DfsStrategy, IncidenceGraph,
};
pub use undirected_graph::{Graph, Neighbors};
pub use visitor::{DfsVisitor, NoopVisitor};
