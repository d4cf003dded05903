//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use order_store::OrderRepository;
use usecase::{CreateOrderInput, CreateOrderUseCase, ListOrdersUseCase, OrderOutput};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<R: OrderRepository> {
    pub create_order: CreateOrderUseCase<R>,
    pub list_orders: ListOrdersUseCase<R>,
    pub repository: R,
}

/// POST /order — create a new order from its line items.
#[tracing::instrument(skip(state, input))]
pub async fn create<R: OrderRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(input): Json<CreateOrderInput>,
) -> Result<(StatusCode, Json<OrderOutput>), ApiError> {
    let order = state.create_order.execute(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /order — list every order, oldest first.
#[tracing::instrument(skip(state))]
pub async fn list<R: OrderRepository + Clone + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<OrderOutput>>, ApiError> {
    let orders = state.list_orders.execute().await?;
    Ok(Json(orders))
}
