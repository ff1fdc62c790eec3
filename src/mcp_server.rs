use agenda_mcp::{SchedulingTools, config::McpConfig};
use color_eyre::eyre::Result;
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    let config = McpConfig::from_env();

    // Stdout carries the protocol, so logs go to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match agenda_mcp::serve_stdio(SchedulingTools::seeded()).await {
        Ok(()) => info!("MCP server shut down gracefully"),
        Err(e) => {
            error!("MCP server error: {e:?}");
            return Err(e);
        }
    }

    Ok(())
}
