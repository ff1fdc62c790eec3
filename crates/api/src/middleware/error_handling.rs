//! # Error Handling Middleware
//!
//! This module maps domain errors to HTTP status codes and JSON error
//! responses, so every handler fails the same way.
//!
//! Extractor rejections (a missing field, a wrong type, a body that is not
//! JSON) are folded into [`SchedulingError::Validation`] and answered with
//! `400 Bad Request` before any handler logic runs.

use agenda_core::errors::SchedulingError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps a [`SchedulingError`] and implements `IntoResponse` to
/// turn it into a status code and a `{"error": "..."}` body.
#[derive(Debug)]
pub struct AppError(pub SchedulingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SchedulingError::NotFound(_) => StatusCode::NOT_FOUND,
            SchedulingError::Validation(_) => StatusCode::BAD_REQUEST,
            SchedulingError::Internal(report) => {
                error!("Internal error while handling request: {report:?}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchedulingError::Internal(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(SchedulingError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(SchedulingError::Validation(rejection.body_text()))
    }
}

/// Maps a SchedulingError to an HTTP response
///
/// Shorthand for `AppError(err).into_response()`.
pub fn map_error(err: SchedulingError) -> Response {
    AppError(err).into_response()
}
