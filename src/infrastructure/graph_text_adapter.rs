use crate::domain::graph::{Graph, SccResult};
use crate::infrastructure::line_parser::parse_sequence;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Serialized shape of a completed analysis.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SccReportDto {
    pub nodes: usize,
    pub edges: usize,
    pub components: Vec<Vec<usize>>,
    pub component_of: Vec<usize>,
    pub cyclic_component: Vec<bool>,
}

impl SccReportDto {
    pub fn from_result(graph: &Graph, scc: &SccResult) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: scc.components.clone(),
            component_of: scc.component_of.clone(),
            cyclic_component: scc.cyclic_component.clone(),
        }
    }
}

/// Reads an adjacency list from a text file.
///
/// Line k holds vertex k's outgoing neighbors, split on `separator`; a blank
/// line is a vertex with no neighbors. Indices are not range-checked here —
/// the detector validates before traversal.
pub async fn read_graph_file(path: &str, separator: &str) -> Result<Graph> {
    let raw = fs::read_to_string(path).await?;
    parse_graph_text(&raw, separator)
}

pub fn parse_graph_text(raw: &str, separator: &str) -> Result<Graph> {
    let mut edges: Vec<Vec<usize>> = Vec::new();
    for (line_no, line) in raw.lines().enumerate() {
        let neighbors = parse_sequence::<usize>(line, separator)
            .with_context(|| format!("parsing adjacency line {}", line_no + 1))?;
        edges.push(neighbors);
    }
    Ok(Graph::from_adjacency(edges))
}

pub async fn write_report_file(path: &str, report: &SccReportDto) -> Result<()> {
    let pretty = serde_json::to_string_pretty(report)?;
    fs::write(path, &pretty).await?;
    Ok(())
}
