//! REST front end and startup wiring for the order service.
//!
//! Translates HTTP requests into calls to the shared use cases, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use events::{BrokerChannel, DispatcherConfig, EventDispatcher, ORDER_CREATED, OrderCreatedHandler};
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::OrderRepository;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use usecase::{CreateOrderUseCase, ListOrdersUseCase};

use config::Config;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: OrderRepository + Clone + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check::<R>))
        .route(
            "/order",
            get(routes::orders::list::<R>).post(routes::orders::create::<R>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Builds the process-wide dispatcher with every handler registered.
///
/// This is the only place handlers are registered; the returned dispatcher
/// is shared read-only afterwards.
pub fn build_dispatcher(channel: Arc<dyn BrokerChannel>, config: &Config) -> EventDispatcher {
    let dispatcher_config = match config.handler_timeout {
        Some(timeout) => DispatcherConfig::with_handler_timeout(timeout),
        None => DispatcherConfig::new(),
    };

    let mut dispatcher = EventDispatcher::with_config(dispatcher_config);
    dispatcher.register(
        ORDER_CREATED,
        Arc::new(
            OrderCreatedHandler::new(channel)
                .with_route(&config.broker_exchange, &config.broker_routing_key),
        ),
    );

    tracing::info!(registry = ?dispatcher.registry(), "event handlers registered");
    dispatcher
}

/// Creates the application state, sharing one repository and dispatcher
/// between the use cases.
pub fn create_state<R: OrderRepository + Clone + 'static>(
    repository: R,
    dispatcher: Arc<EventDispatcher>,
) -> Arc<AppState<R>> {
    Arc::new(AppState {
        create_order: CreateOrderUseCase::new(repository.clone(), dispatcher),
        list_orders: ListOrdersUseCase::new(repository.clone()),
        repository,
    })
}
