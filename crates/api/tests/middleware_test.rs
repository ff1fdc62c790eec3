use agenda_api::{cors_layer, middleware::error_handling::map_error};
use agenda_core::errors::SchedulingError;
use axum::http::StatusCode;

#[tokio::test]
async fn test_error_handling_not_found() {
    let error = SchedulingError::NotFound("Resource not found".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let error = SchedulingError::Validation("Invalid input".to_string());

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let error = SchedulingError::Internal(eyre::eyre!("Something broke"));

    let response = map_error(error);

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_cors_layer_accepts_valid_origins() {
    let origins = vec![
        "http://localhost:5173".to_string(),
        "https://agenda.example.com".to_string(),
    ];

    assert!(cors_layer(&origins).is_ok());
}

#[test]
fn test_cors_layer_rejects_invalid_origin() {
    let origins = vec!["http://bad\norigin".to_string()];

    let err = cors_layer(&origins).unwrap_err();
    assert!(err.to_string().contains("Invalid CORS origin"));
}
