//! Domain layer: pure, synchronous business rules.

pub mod graph;
pub mod traits;
