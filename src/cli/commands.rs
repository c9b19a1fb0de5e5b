//! CLI command implementations.

use log::debug;

use crate::engine::{connected_components, record_events, TraversalEvent};
use crate::graph::{DfsConfig, DfsStrategy, Graph, GraphBuilder};
use crate::types::{GraphError, GraphResult, VertexId};

/// Parse an edge argument of the form `I:J` or `I-J`.
pub fn parse_edge(spec: &str) -> GraphResult<(usize, usize)> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());
    let (a, b) = spec
        .split_once(':')
        .or_else(|| spec.split_once('-'))
        .ok_or_else(invalid)?;
    let source = a.trim().parse().map_err(|_| invalid())?;
    let target = b.trim().parse().map_err(|_| invalid())?;
    Ok((source, target))
}

/// Build a graph from a vertex count and edge arguments, validating every edge.
pub fn build_graph(vertices: usize, edges: &[String]) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::with_vertices(vertices);
    for spec in edges {
        let (source, target) = parse_edge(spec)?;
        builder.link(source, target);
    }
    let graph = builder.build()?;
    debug!(
        "Built graph from arguments: {} vertices, {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Render vertex and edge counts plus the adjacency of every vertex.
pub fn render_info(graph: &Graph, json: bool) -> GraphResult<String> {
    let self_loops = graph.edges().iter().filter(|e| e.is_self_loop()).count();

    if json {
        let vertices: Vec<serde_json::Value> = graph
            .vertices()
            .iter()
            .map(|v| {
                let neighbors: Vec<VertexId> = graph.neighbors(v.id()).collect();
                serde_json::json!({
                    "index": v.index(),
                    "degree": v.degree(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        let info = serde_json::json!({
            "vertices": graph.num_vertices(),
            "edges": graph.num_edges(),
            "self_loops": self_loops,
            "adjacency": vertices,
        });
        Ok(serde_json::to_string_pretty(&info)?)
    } else {
        let mut out = String::new();
        out.push_str(&format!("Vertices: {}\n", graph.num_vertices()));
        out.push_str(&format!("Edges: {}\n", graph.num_edges()));
        out.push_str(&format!("Self-loops: {}\n", self_loops));
        out.push_str("Adjacency:\n");
        for v in graph.vertices() {
            let neighbors: Vec<String> = graph
                .neighbors(v.id())
                .map(|n| n.to_string())
                .collect();
            out.push_str(&format!(
                "  {} (degree {}): {}\n",
                v.index(),
                v.degree(),
                neighbors.join(" ")
            ));
        }
        Ok(out)
    }
}

/// Render the callback sequence of a full search.
pub fn render_dfs(graph: &Graph, strategy: DfsStrategy, json: bool) -> GraphResult<String> {
    let events = record_events(graph, &DfsConfig::with_strategy(strategy));

    if json {
        let trace = serde_json::json!({
            "strategy": strategy.name(),
            "events": events,
        });
        Ok(serde_json::to_string_pretty(&trace)?)
    } else {
        let mut out = String::new();
        let mut depth = 0usize;
        for event in &events {
            if let TraversalEvent::Backtrack { .. } = event {
                depth = depth.saturating_sub(1);
            }
            out.push_str(&format!("{}{}\n", "  ".repeat(depth), event));
            if let TraversalEvent::Discover { .. } = event {
                depth += 1;
            }
        }
        Ok(out)
    }
}

/// Render the connected components found by a full search.
pub fn render_components(graph: &Graph, json: bool) -> GraphResult<String> {
    let forest = connected_components(graph);
    let components = forest.components();

    if json {
        let info = serde_json::json!({
            "count": forest.component_count(),
            "components": components,
        });
        Ok(serde_json::to_string_pretty(&info)?)
    } else {
        let mut out = format!("Components: {}\n", forest.component_count());
        for (i, component) in components.iter().enumerate() {
            let members: Vec<String> = component.vertices.iter().map(|v| v.to_string()).collect();
            out.push_str(&format!(
                "  #{} root {}: {}\n",
                i,
                component.root,
                members.join(" ")
            ));
        }
        Ok(out)
    }
}

/// Print graph info.
pub fn cmd_info(graph: &Graph, json: bool) -> GraphResult<()> {
    print!("{}", render_info(graph, json)?);
    if json {
        println!();
    }
    Ok(())
}

/// Print the search trace.
pub fn cmd_dfs(graph: &Graph, strategy: DfsStrategy, json: bool) -> GraphResult<()> {
    print!("{}", render_dfs(graph, strategy, json)?);
    if json {
        println!();
    }
    Ok(())
}

/// Print the connected components.
pub fn cmd_components(graph: &Graph, json: bool) -> GraphResult<()> {
    print!("{}", render_components(graph, json)?);
    if json {
        println!();
    }
    Ok(())
}
