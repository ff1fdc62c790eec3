use std::env;

use agenda_core::config::parse_log_level;
use tracing::Level;

/// Configuration for the MCP stdio server.
///
/// The server has no network surface, so the only knob is verbosity.
#[derive(Debug, Clone)]
pub struct McpConfig {
    /// Log level for messages written to stderr
    pub log_level: Level,
}

impl Default for McpConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
        }
    }
}

impl McpConfig {
    /// Load configuration from environment variables
    ///
    /// `LOG_LEVEL` is mapped exactly as the REST server maps it.
    pub fn from_env() -> Self {
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_default());

        Self { log_level }
    }
}
