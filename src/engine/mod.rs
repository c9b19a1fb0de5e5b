//! High-level analyses built on the depth-first search visitor protocol.

pub mod closure;
pub mod forest;
pub mod recorder;

pub use closure::ClosureDetector;
pub use forest::{Component, SpanningForest};
pub use recorder::{EventRecorder, TraversalEvent};

use crate::graph::{depth_first_search_with, DfsConfig, IncidenceGraph};
use crate::types::{EdgeId, VertexId};

/// Search the whole graph and return its spanning forest.
pub fn connected_components<G: IncidenceGraph + ?Sized>(graph: &G) -> SpanningForest {
    let mut forest = SpanningForest::new();
    depth_first_search_with(graph, &mut forest, &DfsConfig::default());
    forest
}

/// Vertices in the order a full search discovers them.
pub fn discovery_order<G: IncidenceGraph + ?Sized>(graph: &G) -> Vec<VertexId> {
    connected_components(graph).discovery_order().to_vec()
}

/// Closure edges of a full search, in report order.
pub fn closure_edges<G: IncidenceGraph + ?Sized>(graph: &G) -> Vec<EdgeId> {
    let mut detector = ClosureDetector::new();
    depth_first_search_with(graph, &mut detector, &DfsConfig::default());
    detector.closure_edges().to_vec()
}

/// Record the full event sequence of a search.
pub fn record_events<G: IncidenceGraph + ?Sized>(
    graph: &G,
    config: &DfsConfig,
) -> Vec<TraversalEvent> {
    let mut recorder = EventRecorder::new();
    depth_first_search_with(graph, &mut recorder, config);
    recorder.into_events()
}
