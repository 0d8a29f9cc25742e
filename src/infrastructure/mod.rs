// Infrastructure layer: algorithm implementations, parsing, file IO, eventing
pub mod event_ndjson;
pub mod graph_text_adapter;
pub mod line_parser;
pub mod scc_tarjan;
