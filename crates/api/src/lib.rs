//! # Agenda API
//!
//! The API crate provides the web server for the Agenda scheduling service.
//! It exposes the availability check as a REST endpoint, next to a small
//! catalog of bookable services and the usual health probes.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the core predicate
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. All data is held in memory.

/// Configuration module for API settings
pub mod config;
/// Request handlers that call into the core crate
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use agenda_core::{availability::BusySchedule, catalog::ServiceCatalog};
use axum::{Router, http::HeaderValue};
use eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
///
/// Both members are built once at start-up and only ever read afterwards,
/// so handlers share them through an `Arc` without any locking.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use agenda_api::ApiState;
///
/// let state = Arc::new(ApiState::seeded());
/// let app = agenda_api::app(state);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiState {
    /// Slots that are already booked
    pub schedule: BusySchedule,
    /// Services offered for booking
    pub catalog: ServiceCatalog,
}

impl ApiState {
    pub fn new(schedule: BusySchedule, catalog: ServiceCatalog) -> Self {
        Self { schedule, catalog }
    }

    /// State populated with the built-in seed data.
    pub fn seeded() -> Self {
        Self::new(BusySchedule::seeded(), ServiceCatalog::seeded())
    }
}

/// Builds the application router with every route attached to `state`.
///
/// No CORS or timeout layers are applied here; [`start_server`] adds those
/// from the configuration.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Availability check endpoint
        .merge(routes::availability::routes())
        // Service catalog endpoints
        .merge(routes::services::routes())
        // Attach shared state to all routes
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer for the configured origins.
///
/// # Errors
///
/// Returns an error if any origin is not a valid header value.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .wrap_err_with(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(origins))
}

/// Starts the API server with the provided configuration and state
///
/// This function sets up logging, configures routes and layers, and serves
/// HTTP until the listener fails.
///
/// # Arguments
///
/// * `config` - API configuration including host, port, and other settings
/// * `state` - Busy schedule and service catalog shared by all handlers
///
/// # Returns
///
/// * `Result<()>` - Success or error result
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(
        busy_slots = state.schedule.len(),
        services = state.catalog.services().len(),
        "Loaded scheduling data"
    );

    let app = app(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)?),
        None => app,
    };

    // Add request timeout middleware
    let app = app.layer(
        ServiceBuilder::new()
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
