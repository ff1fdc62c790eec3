use agenda_api::{ApiState, config::ApiConfig};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Busy slots and services are fixed at start-up
    let state = ApiState::seeded();

    // Start API server
    agenda_api::start_server(config, state).await?;

    Ok(())
}
