use std::sync::Arc;

use agenda_core::{errors::SchedulingError, models::service::Service};
use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Lists every service in the catalog, in catalog order.
pub async fn list_services(State(state): State<Arc<ApiState>>) -> Json<Vec<Service>> {
    Json(state.catalog.services().to_vec())
}

/// Returns a single service by its numeric id.
///
/// # Errors
///
/// * `SchedulingError::Validation` - The id is not a non-negative integer
/// * `SchedulingError::NotFound` - No service has that id
pub async fn get_service(
    State(state): State<Arc<ApiState>>,
    id: Result<Path<u32>, PathRejection>,
) -> Result<Json<Service>, AppError> {
    let Path(id) = id?;

    let service = state
        .catalog
        .get(id)
        .cloned()
        .ok_or_else(|| SchedulingError::NotFound(format!("Service with ID {id} not found")))?;

    Ok(Json(service))
}
