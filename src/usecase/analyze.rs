use crate::domain::graph::{Graph, SccResult};
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalyzeStats;
use anyhow::{Context, Result};
use tokio::sync::mpsc;

/// Runs one SCC computation over `graph`, emitting progress events to `sink`
/// when present. Fails before any traversal if the graph is invalid; no
/// partial result is ever produced.
pub async fn analyze_graph(
    graph: &Graph,
    scc: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<(SccResult, AnalyzeStats)> {
    emit(
        &sink,
        AppEvent::GraphLoaded {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let scc_res = scc.compute_scc(graph).context("computing SCCs")?;
    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: scc_res.components.len(),
            cyclic_components: scc_res.cyclic_count(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    let stats = AnalyzeStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        components: scc_res.components.len(),
        cyclic_components: scc_res.cyclic_count(),
        singleton_components: scc_res.components.iter().filter(|c| c.len() == 1).count(),
        largest_component: scc_res.components.iter().map(|c| c.len()).max().unwrap_or(0),
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;
    Ok((scc_res, stats))
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
