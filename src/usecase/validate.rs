use crate::domain::graph::Graph;
use anyhow::{Context, Result};

/// Checks the structural invariants a graph must satisfy before analysis:
/// every adjacency entry references a vertex inside `0..node_count`.
/// Self-loops, parallel edges, and disconnected vertices are all valid.
pub fn validate_graph(graph: &Graph) -> Result<()> {
    graph
        .validate()
        .with_context(|| format!("graph with {} vertices", graph.node_count()))?;
    Ok(())
}
