//! Binary entrypoint.
//!
//! The algorithmic core is synchronous; tokio only drives file IO and the
//! NDJSON event printer around it.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    digraph_scc_analyzer::interface::cli::run().await
}
