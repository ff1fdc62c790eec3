//! # Agenda MCP
//!
//! Exposes the availability check as a tool for AI agents over the Model
//! Context Protocol. The tool answers in Portuguese prose because its
//! consumer is a language model; the REST API in `agenda-api` serves the
//! same predicate as structured JSON.

pub mod config;
pub mod messages;
pub mod tools;

use eyre::{Result, WrapErr};
use rmcp::{ServiceExt, transport::stdio};
use tracing::info;

pub use tools::SchedulingTools;

/// Serves `tools` on stdin/stdout until the client disconnects.
///
/// Nothing else may write to stdout while this runs; logs belong on stderr.
pub async fn serve_stdio(handler: SchedulingTools) -> Result<()> {
    info!("Starting MCP server {} on stdio", tools::SERVER_NAME);

    let service = handler
        .serve(stdio())
        .await
        .wrap_err("Failed to initialise MCP session")?;
    let reason = service.waiting().await?;

    info!(?reason, "MCP session closed");
    Ok(())
}
