use crate::domain::graph::{Graph, GraphError, SccResult};
use crate::domain::traits::SccDetector;

/// Tarjan's algorithm: one depth-first traversal, SCCs extracted on the fly
/// as the traversal unwinds. O(V + E) time and space.
///
/// The traversal is iterative (explicit work stack of
/// `(vertex, next-neighbor-position)` frames) so that deep graphs cannot
/// exhaust the call stack; visitation order, low-link update timing, and SCC
/// boundaries are identical to the recursive formulation.
pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn compute_scc(&self, graph: &Graph) -> Result<SccResult, GraphError> {
        graph.validate()?;
        Ok(tarjan_scc(graph))
    }
}

const UNASSIGNED: usize = usize::MAX;

/// Traversal state, fresh per computation and discarded with it.
struct Traversal {
    next_index: usize,
    index_of: Vec<usize>,
    low_link: Vec<usize>,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    /// Candidate set: vertices visited but not yet closed into an SCC.
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
    component_of: Vec<usize>,
}

fn tarjan_scc(graph: &Graph) -> SccResult {
    let n = graph.node_count();
    let mut state = Traversal {
        next_index: 0,
        index_of: vec![0; n],
        low_link: vec![0; n],
        visited: vec![false; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        components: Vec::new(),
        component_of: vec![UNASSIGNED; n],
    };

    // Restart from every unvisited vertex so disconnected graphs and
    // isolated vertices are covered.
    for v in 0..n {
        if !state.visited[v] {
            strong_connect(v, &graph.edges, &mut state);
        }
    }

    let cyclic_component = state
        .components
        .iter()
        .map(|comp| comp.len() > 1 || graph.edges[comp[0]].contains(&comp[0]))
        .collect();

    SccResult {
        component_of: state.component_of,
        components: state.components,
        cyclic_component,
    }
}

/// One DFS rooted at `start`, driven by an explicit frame stack.
///
/// A frame `(v, i)` means: v's neighbors before position i are explored.
/// A frame is re-entered with i > 0 exactly when `edges[v][i - 1]` was
/// descended into as a tree edge, so that is the point where the child's
/// low-link propagates to v.
fn strong_connect(start: usize, edges: &[Vec<usize>], state: &mut Traversal) {
    let mut frames: Vec<(usize, usize)> = vec![(start, 0)];

    while let Some((v, next_i)) = frames.pop() {
        if next_i == 0 {
            // First entry: assign discovery index and open v as a candidate.
            state.index_of[v] = state.next_index;
            state.low_link[v] = state.next_index;
            state.next_index += 1;
            state.visited[v] = true;
            state.stack.push(v);
            state.on_stack[v] = true;
        } else {
            // Returning from the tree edge explored at next_i - 1.
            let u = edges[v][next_i - 1];
            state.low_link[v] = state.low_link[v].min(state.low_link[u]);
        }

        let mut i = next_i;
        let mut descended = false;
        while i < edges[v].len() {
            let u = edges[v][i];
            if !state.visited[u] {
                frames.push((v, i + 1));
                frames.push((u, 0));
                descended = true;
                break;
            }
            if state.on_stack[u] {
                // Back or forward edge within the open candidate set.
                state.low_link[v] = state.low_link[v].min(state.index_of[u]);
            }
            // Otherwise a cross edge into an already-closed component;
            // it must not influence v's low-link.
            i += 1;
        }
        if descended {
            continue;
        }

        // All neighbors explored: v's DFS is finished. If no path leads out
        // of the open set to an earlier-discovered vertex, v is an SCC root.
        if state.low_link[v] == state.index_of[v] {
            let id = state.components.len();
            let mut component = Vec::new();
            while let Some(w) = state.stack.pop() {
                state.on_stack[w] = false;
                state.component_of[w] = id;
                component.push(w);
                if w == v {
                    break;
                }
            }
            state.components.push(component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::graph::Graph;

    fn sorted(mut comp: Vec<usize>) -> Vec<usize> {
        comp.sort_unstable();
        comp
    }

    #[test]
    fn rejects_out_of_range_edge_before_traversal() {
        let g = Graph::from_adjacency(vec![vec![3]]);
        let err = TarjanSccDetector.compute_scc(&g).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidGraph {
                from: 0,
                to: 3,
                node_count: 1
            }
        );
    }

    #[test]
    fn empty_graph_yields_no_components() {
        let g = Graph::new(0);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert!(scc.components.is_empty());
        assert!(scc.component_of.is_empty());
        assert!(scc.cyclic_component.is_empty());
    }

    #[test]
    fn component_members_are_in_unwind_order_for_a_cycle() {
        // 0 -> 1 -> 2 -> 0. Root is 0; the stack unwinds 2, 1, 0.
        let g = Graph::from_adjacency(vec![vec![1], vec![2], vec![0]]);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert_eq!(scc.components, vec![vec![2, 1, 0]]);
    }

    #[test]
    fn components_close_in_reverse_topological_order() {
        // 0 -> 1 -> 2 chain: sink components close first.
        let g = Graph::from_adjacency(vec![vec![1], vec![2], vec![]]);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert_eq!(scc.components, vec![vec![2], vec![1], vec![0]]);
        assert_eq!(scc.component_of, vec![2, 1, 0]);
    }

    #[test]
    fn parallel_edges_and_self_loops_do_not_corrupt_results() {
        // 0 -> 1 twice, 1 -> 0 twice, plus a self-loop on 0.
        let g = Graph::from_adjacency(vec![vec![1, 1, 0], vec![0, 0]]);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert_eq!(scc.components.len(), 1);
        assert_eq!(sorted(scc.components[0].clone()), vec![0, 1]);
        assert_eq!(scc.cyclic_component, vec![true]);
    }

    #[test]
    fn deep_path_does_not_overflow_the_call_stack() {
        // A single directed path through 200k vertices forces worst-case
        // traversal depth; the frame stack keeps this off the call stack.
        let n = 200_000;
        let mut edges = vec![Vec::new(); n];
        for v in 0..n - 1 {
            edges[v].push(v + 1);
        }
        let g = Graph::from_adjacency(edges);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert_eq!(scc.components.len(), n);
    }

    #[test]
    fn deep_cycle_collapses_into_one_component() {
        let n = 100_000;
        let mut edges = vec![Vec::new(); n];
        for v in 0..n {
            edges[v].push((v + 1) % n);
        }
        let g = Graph::from_adjacency(edges);
        let scc = TarjanSccDetector.compute_scc(&g).expect("scc");
        assert_eq!(scc.components.len(), 1);
        assert_eq!(scc.components[0].len(), n);
        assert_eq!(scc.cyclic_component, vec![true]);
    }
}
