//! Verifies that `AppError` variants map to the documented status codes and
//! JSON bodies.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use portfolio_api::error::AppError;
use portfolio_core::error::CoreError;

async fn error_to_response(error: AppError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_maps_to_404_with_details() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: "ghost".to_string(),
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Project not found");
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["details"], "Project with id ghost not found");
}

#[tokio::test]
async fn validation_maps_to_400() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Validation(
        "Missing required fields: title".to_string(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"], "Missing required fields: title");
}

#[tokio::test]
async fn conflict_maps_to_400_without_details() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Conflict(
        "Project with this title already exists".to_string(),
    )))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Project with this title already exists");
    assert_eq!(json["code"], "CONFLICT");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn core_internal_maps_to_500_with_details() {
    let (status, json) = error_to_response(AppError::Core(CoreError::Internal(
        "Permission denied".to_string(),
    )))
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
    assert_eq!(json["details"], "Permission denied");
}
