use thiserror::Error;

/// Errors raised by graph construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An adjacency entry references a vertex index outside `0..node_count`.
    #[error("invalid graph: edge {from} -> {to} references a vertex outside 0..{node_count}")]
    InvalidGraph {
        from: usize,
        to: usize,
        node_count: usize,
    },
}

/// A directed graph as an adjacency list over vertices `0..node_count`.
///
/// Immutable for the lifetime of a computation. Multi-edges and self-loops
/// are permitted and never deduplicated.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub edges: Vec<Vec<usize>>,
}

impl Graph {
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: vec![Vec::new(); node_count],
        }
    }

    pub fn from_adjacency(edges: Vec<Vec<usize>>) -> Self {
        Self { edges }
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|v| v.len()).sum()
    }

    /// Checks that every neighbor index lies in `0..node_count`.
    ///
    /// Detectors validate eagerly and fail atomically before touching any
    /// traversal state.
    pub fn validate(&self) -> Result<(), GraphError> {
        let n = self.node_count();
        for (from, outs) in self.edges.iter().enumerate() {
            for &to in outs {
                if to >= n {
                    return Err(GraphError::InvalidGraph {
                        from,
                        to,
                        node_count: n,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The partition of a graph's vertices into strongly connected components.
///
/// `components` holds each SCC with its vertices in DFS-unwind pop order;
/// components themselves appear in the order they were closed (for Tarjan,
/// reverse topological order of the condensation). `component_of[v]` is the
/// id of v's component. `cyclic_component[c]` is true when component `c` has
/// more than one vertex or a self-loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<usize>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }
}
