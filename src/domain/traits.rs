use crate::domain::graph::{Graph, GraphError, SccResult};

/// Port for strongly-connected-component detection.
///
/// Implementations must validate the graph before traversal and return
/// `GraphError::InvalidGraph` without exposing any partial result.
pub trait SccDetector {
    fn compute_scc(&self, graph: &Graph) -> Result<SccResult, GraphError>;
}
