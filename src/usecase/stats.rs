use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyzeStats {
    pub nodes: usize,
    pub edges: usize,
    pub components: usize,
    pub cyclic_components: usize,
    pub singleton_components: usize,
    pub largest_component: usize,
}
