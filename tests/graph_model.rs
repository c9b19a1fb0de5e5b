//! Graph model tests: indexing, incidence order, adjacency and construction.

use pregolya::graph::{Graph, GraphBuilder};
use pregolya::types::{EdgeId, GraphError, VertexId};

fn v(i: usize) -> VertexId {
    VertexId::new(i)
}

fn e(i: usize) -> EdgeId {
    EdgeId::new(i)
}

// ==================== Indexing ====================

#[test]
fn test_indices_equal_positions() {
    let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 4), (0, 1)]);

    assert_eq!(graph.vertices().len(), graph.num_vertices());
    assert_eq!(graph.edges().len(), graph.num_edges());
    for (pos, vertex) in graph.vertices().iter().enumerate() {
        assert_eq!(vertex.index(), pos);
        assert_eq!(vertex.id(), v(pos));
    }
    for (pos, edge) in graph.edges().iter().enumerate() {
        assert_eq!(edge.index(), pos);
        assert_eq!(edge.id(), e(pos));
    }
}

#[test]
fn test_empty_graph() {
    let graph = Graph::new();
    assert_eq!(graph.num_vertices(), 0);
    assert_eq!(graph.num_edges(), 0);
    assert!(graph.vertices().is_empty());
    assert!(graph.edges().is_empty());
}

#[test]
fn test_add_vertex_is_sequential() {
    let mut graph = Graph::new();
    let mut mutator = graph.mutator();
    assert_eq!(mutator.add_vertex(), v(0));
    assert_eq!(mutator.add_vertex(), v(1));
    assert_eq!(mutator.add_vertex(), v(2));
    assert_eq!(graph.num_vertices(), 3);
}

#[test]
fn test_add_edge_returns_sequential_ids() {
    let mut graph = Graph::from_edges(3, &[]);
    let mut mutator = graph.mutator();
    assert_eq!(mutator.add_edge(v(0), v(1)), e(0));
    assert_eq!(mutator.add_edge(v(1), v(2)), e(1));
    assert_eq!(graph.edge(e(1)).source(), v(1));
    assert_eq!(graph.edge(e(1)).target(), v(2));
}

#[test]
fn test_growth_after_construct() {
    let mut graph = Graph::from_edges(2, &[(0, 1)]);
    let w = graph.mutator().add_vertex();
    let edge = graph.mutator().add_edge(w, v(0));

    assert_eq!(w, v(2));
    assert_eq!(edge, e(1));
    assert_eq!(graph.vertex(v(0)).edges(), &[e(0), e(1)]);
    assert!(graph.is_adjacent(w, v(0)));
}

#[test]
fn test_get_out_of_range() {
    let graph = Graph::from_edges(2, &[(0, 1)]);
    assert!(graph.get_vertex(v(1)).is_some());
    assert!(graph.get_vertex(v(2)).is_none());
    assert!(graph.get_edge(e(0)).is_some());
    assert!(graph.get_edge(e(1)).is_none());
}

// ==================== Edges ====================

#[test]
fn test_other_returns_opposite_endpoint() {
    let graph = Graph::from_edges(4, &[(0, 1), (2, 3), (3, 1), (2, 2)]);
    for edge in graph.edges() {
        assert_eq!(edge.other(edge.source()), edge.target());
        assert_eq!(edge.other(edge.target()), edge.source());
    }
}

#[test]
fn test_self_loop_flag() {
    let graph = Graph::from_edges(2, &[(0, 1), (1, 1)]);
    assert!(!graph.edge(e(0)).is_self_loop());
    assert!(graph.edge(e(1)).is_self_loop());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not an endpoint")]
fn test_other_with_non_endpoint_panics_in_debug() {
    let graph = Graph::from_edges(3, &[(0, 1)]);
    graph.edge(e(0)).other(v(2));
}

// ==================== Incidence ====================

#[test]
fn test_incidence_order_follows_insertion() {
    let graph = Graph::from_edges(3, &[(1, 2), (0, 1), (2, 0)]);
    assert_eq!(graph.vertex(v(0)).edges(), &[e(1), e(2)]);
    assert_eq!(graph.vertex(v(1)).edges(), &[e(0), e(1)]);
    assert_eq!(graph.vertex(v(2)).edges(), &[e(0), e(2)]);
}

#[test]
fn test_self_loop_attached_twice() {
    let graph = Graph::from_edges(2, &[(0, 0), (0, 1)]);
    let vertex = graph.vertex(v(0));

    assert_eq!(vertex.degree(), 3);
    assert_eq!(vertex.edges(), &[e(0), e(0), e(1)]);
    let neighbors: Vec<VertexId> = graph.neighbors(v(0)).collect();
    assert_eq!(neighbors, vec![v(0), v(0), v(1)]);
}

#[test]
fn test_parallel_edges_yield_repeated_neighbors() {
    let graph = Graph::from_edges(2, &[(0, 1), (1, 0)]);
    let neighbors: Vec<VertexId> = graph.neighbors(v(0)).collect();
    assert_eq!(neighbors, vec![v(1), v(1)]);
    assert_eq!(graph.degree(v(1)), 2);
}

#[test]
fn test_neighbors_len_equals_degree() {
    let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 0), (3, 1), (2, 1), (1, 2)]);
    for vertex in graph.vertices() {
        let neighbors = graph.neighbors(vertex.id());
        assert_eq!(neighbors.len(), vertex.degree());
        assert_eq!(neighbors.count(), vertex.edges().len());
    }
}

#[test]
fn test_isolated_vertex() {
    let graph = Graph::from_edges(5, &[(0, 1), (2, 3)]);
    assert_eq!(graph.degree(v(4)), 0);
    assert_eq!(graph.neighbors(v(4)).count(), 0);
}

// ==================== Adjacency ====================

#[test]
fn test_is_adjacent() {
    let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (3, 3)]);

    assert!(graph.is_adjacent(v(0), v(1)));
    assert!(graph.is_adjacent(v(1), v(0)));
    assert!(graph.is_adjacent(v(2), v(1)));
    assert!(!graph.is_adjacent(v(0), v(2)));
    assert!(!graph.is_adjacent(v(0), v(0)));
    assert!(graph.is_adjacent(v(3), v(3)));
    assert!(!graph.is_adjacent(v(3), v(0)));
}

#[test]
fn test_is_adjacent_matches_edge_list() {
    let pairs = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3), (4, 4)];
    let graph = Graph::from_edges(6, &pairs);

    for a in 0..6 {
        for b in 0..6 {
            let expected = pairs
                .iter()
                .any(|&(i, j)| (i == a && j == b) || (i == b && j == a));
            assert_eq!(graph.is_adjacent(v(a), v(b)), expected, "({}, {})", a, b);
        }
    }
}

// ==================== Construction ====================

#[test]
#[should_panic(expected = "out of range")]
fn test_construct_rejects_out_of_range() {
    Graph::from_edges(3, &[(0, 1), (1, 3)]);
}

#[test]
fn test_construct_appends_to_non_empty_graph() {
    let mut graph = Graph::from_edges(3, &[]);
    graph.mutator().construct(2, &[(0, 1)]);

    assert_eq!(graph.num_vertices(), 5);
    assert_eq!(graph.num_edges(), 1);
    for (pos, vertex) in graph.vertices().iter().enumerate() {
        assert_eq!(vertex.id(), v(pos));
    }
    // Pair components index the whole vertex list, not the appended block.
    assert_eq!(graph.edge(e(0)).source(), v(0));
    assert_eq!(graph.edge(e(0)).target(), v(1));
    assert_eq!(graph.degree(v(0)), 1);
    assert_eq!(graph.degree(v(1)), 1);
    assert_eq!(graph.degree(v(3)), 0);
    assert_eq!(graph.degree(v(4)), 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_add_edge_rejects_unknown_vertex() {
    let mut graph = Graph::from_edges(2, &[]);
    graph.mutator().add_edge(v(0), v(2));
}

#[test]
fn test_builder_matches_construct() {
    let pairs = [(0, 1), (1, 2), (2, 2), (2, 0)];
    let mut builder = GraphBuilder::with_vertices(3);
    builder.links(pairs.iter().copied());
    assert_eq!(builder.vertex_count(), 3);
    assert_eq!(builder.edge_count(), 4);

    let built = builder.build().unwrap();
    assert_eq!(built, Graph::from_edges(3, &pairs));
}

#[test]
fn test_builder_fluent_links() {
    let mut builder = GraphBuilder::new();
    let a = builder.add_vertex();
    let b = builder.add_vertex();
    assert_eq!((a, b), (0, 1));
    builder.link(a, b).link(b, b);

    let graph = builder.build().unwrap();
    assert_eq!(graph.num_vertices(), 2);
    assert_eq!(graph.num_edges(), 2);
    assert!(graph.is_adjacent(v(a), v(b)));
    assert!(graph.is_adjacent(v(b), v(b)));
}

#[test]
fn test_builder_rejects_out_of_range() {
    let mut builder = GraphBuilder::with_vertices(3);
    builder.link(0, 1).link(2, 5);

    match builder.build() {
        Err(GraphError::VertexOutOfRange { vertex, count }) => {
            assert_eq!(vertex, 5);
            assert_eq!(count, 3);
        }
        other => panic!("Expected VertexOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_try_from_edges() {
    let graph = Graph::try_from_edges(2, &[(0, 1)]).unwrap();
    assert_eq!(graph.num_edges(), 1);

    let err = Graph::try_from_edges(2, &[(2, 0)]).unwrap_err();
    assert!(matches!(
        err,
        GraphError::VertexOutOfRange { vertex: 2, count: 2 }
    ));
    assert_eq!(
        err.to_string(),
        "Vertex index 2 out of range for a graph with 2 vertices"
    );
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
}
