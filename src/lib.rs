//! Strongly connected component analysis for directed graphs.
//!
//! This crate is intentionally split into Clean Architecture layers:
//! - domain: pure, synchronous business rules (graph model, SCC contract)
//! - usecase: orchestration + progress events
//! - infrastructure: algorithm implementations, parsing, async IO, eventing
//! - interface: CLI wiring

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
