//! # Availability Handlers
//!
//! REST binding of the core availability predicate. The request is decoded
//! and validated here; the answer is always `200 OK`, with `status` telling
//! free from occupied. An occupied slot is an expected outcome, not an error.

use std::sync::Arc;

use agenda_core::models::slot::{AvailabilityRequest, AvailabilityResponse, AvailabilityStatus};
use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::debug;

use crate::{ApiState, middleware::error_handling::AppError};

/// Message returned when the requested slot can be booked.
pub const FREE_MESSAGE: &str = "Horário disponível para agendamento.";
/// Message returned when the requested slot is already taken.
pub const OCCUPIED_MESSAGE: &str = "Horário indisponível.";

/// Builds the response payload for a check outcome.
pub fn availability_response(status: AvailabilityStatus) -> AvailabilityResponse {
    let message = match status {
        AvailabilityStatus::Free => FREE_MESSAGE,
        AvailabilityStatus::Occupied => OCCUPIED_MESSAGE,
    };

    AvailabilityResponse {
        status,
        message: message.to_string(),
    }
}

/// Checks whether a date and hour are still free for booking
///
/// # Endpoint
///
/// ```text
/// POST /api/check-availability
/// {"date": "2025-10-20", "hour": "16:00"}
/// ```
///
/// # Errors
///
/// * `SchedulingError::Validation` - Body is not JSON, a field is missing or
///   not a string, or a value is not in `YYYY-MM-DD` / `HH:MM` form
#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    let status = state.schedule.status(&request);
    debug!(date = %request.date, hour = %request.hour, ?status, "Checked availability");

    Ok(Json(availability_response(status)))
}
