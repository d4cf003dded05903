//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use order_store::OrderRepository;
use serde::Serialize;

use super::orders::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<usize>,
}

/// GET /health — reports whether the order repository answers.
pub async fn check<R: OrderRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> (StatusCode, Json<HealthResponse>) {
    match state.repository.count().await {
        Ok(orders) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                orders: Some(orders),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                    orders: None,
                }),
            )
        }
    }
}
