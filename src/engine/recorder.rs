//! Visitor that records the full callback sequence.

use serde::Serialize;

use crate::graph::DfsVisitor;
use crate::types::{EdgeId, VertexId};

/// One callback of a depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// A vertex was discovered.
    Discover { vertex: VertexId },
    /// A tree edge was followed.
    TreeEdge { edge: EdgeId },
    /// A vertex was finished.
    Backtrack { vertex: VertexId },
    /// An edge to an already finished vertex.
    Closure { edge: EdgeId },
}

impl TraversalEvent {
    /// Return a human-readable name for this event kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Discover { .. } => "discover",
            Self::TreeEdge { .. } => "tree_edge",
            Self::Backtrack { .. } => "backtrack",
            Self::Closure { .. } => "closure",
        }
    }
}

impl std::fmt::Display for TraversalEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discover { vertex } | Self::Backtrack { vertex } => {
                write!(f, "{} vertex {}", self.name(), vertex)
            }
            Self::TreeEdge { edge } | Self::Closure { edge } => {
                write!(f, "{} edge {}", self.name(), edge)
            }
        }
    }
}

/// Records every event in the order the search emits it.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Vec<TraversalEvent>,
}

impl EventRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded events.
    pub fn events(&self) -> &[TraversalEvent] {
        &self.events
    }

    /// Consume the recorder, returning its events.
    pub fn into_events(self) -> Vec<TraversalEvent> {
        self.events
    }

    /// Discovered vertices in discovery order.
    pub fn discovered(&self) -> Vec<VertexId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::Discover { vertex } => Some(*vertex),
                _ => None,
            })
            .collect()
    }

    /// Finished vertices in finish order.
    pub fn backtracked(&self) -> Vec<VertexId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::Backtrack { vertex } => Some(*vertex),
                _ => None,
            })
            .collect()
    }

    /// Tree edges in the order they were followed.
    pub fn tree_edges(&self) -> Vec<EdgeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::TreeEdge { edge } => Some(*edge),
                _ => None,
            })
            .collect()
    }

    /// Closure edges in the order they were reported.
    pub fn closures(&self) -> Vec<EdgeId> {
        self.events
            .iter()
            .filter_map(|e| match e {
                TraversalEvent::Closure { edge } => Some(*edge),
                _ => None,
            })
            .collect()
    }
}

impl<G: ?Sized> DfsVisitor<G> for EventRecorder {
    fn vertex(&mut self, _graph: &G, v: VertexId) {
        self.events.push(TraversalEvent::Discover { vertex: v });
    }

    fn edge(&mut self, _graph: &G, e: EdgeId) {
        self.events.push(TraversalEvent::TreeEdge { edge: e });
    }

    fn backtrack(&mut self, _graph: &G, v: VertexId) {
        self.events.push(TraversalEvent::Backtrack { vertex: v });
    }

    fn closure(&mut self, _graph: &G, e: EdgeId) {
        self.events.push(TraversalEvent::Closure { edge: e });
    }
}
