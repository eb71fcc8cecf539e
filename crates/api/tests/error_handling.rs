//! Tests for the `AppError` to HTTP response mapping. No database needed;
//! these exercise `IntoResponse` directly.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

use mutuals_api::error::AppError;
use mutuals_core::error::CoreError;

async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_not_found_maps_to_404() {
    let (status, body) = response_parts(AppError::Core(CoreError::NotFound {
        entity: "Conversation",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["error"], "Conversation with id 42 not found");
}

#[tokio::test]
async fn test_validation_maps_to_400() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Validation("content is empty".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"], "content is empty");
}

#[tokio::test]
async fn test_conflict_maps_to_409() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Conflict("already liked this user".into())))
            .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
}

#[tokio::test]
async fn test_forbidden_maps_to_403() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Forbidden("conversation is locked".into())))
            .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_unauthorized_maps_to_401() {
    let (status, body) =
        response_parts(AppError::Core(CoreError::Unauthorized("missing token".into()))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_is_sanitized() {
    let (status, body) =
        response_parts(AppError::InternalError("pool exhausted at shard 3".into())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    // Internal details never leak to clients.
    assert_eq!(body["error"], "An internal error occurred");
}

#[tokio::test]
async fn test_row_not_found_maps_to_404() {
    let (status, body) = response_parts(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_bad_request_keeps_message() {
    let (status, body) = response_parts(AppError::BadRequest("limit must be positive".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], "limit must be positive");
}
