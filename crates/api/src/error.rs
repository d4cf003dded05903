//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use order_store::StoreError;
use usecase::UseCaseError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Use case failure.
    UseCase(UseCaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::UseCase(err) => use_case_error_to_response(err),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn use_case_error_to_response(err: UseCaseError) -> (StatusCode, String) {
    match &err {
        UseCaseError::Validation(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        UseCaseError::Store(StoreError::Duplicate(_)) => (StatusCode::CONFLICT, err.to_string()),
        UseCaseError::Store(_) => {
            tracing::error!(error = %err, "order store failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        ApiError::UseCase(err)
    }
}
