//! Integration tests for the REST front end.

use std::sync::Arc;
use std::sync::OnceLock;

use api::config::Config;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use events::InMemoryBroker;
use metrics_exporter_prometheus::PrometheusHandle;
use order_store::{InMemoryOrderRepository, OrderRepository};
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

struct TestApp {
    router: axum::Router,
    repository: InMemoryOrderRepository,
    broker: InMemoryBroker,
}

fn setup() -> TestApp {
    let repository = InMemoryOrderRepository::new();
    let broker = InMemoryBroker::new();
    let dispatcher = Arc::new(api::build_dispatcher(
        Arc::new(broker.clone()),
        &Config::default(),
    ));
    let state = api::create_state(repository.clone(), dispatcher);
    let router = api::create_app(state, get_metrics_handle());

    TestApp {
        router,
        repository,
        broker,
    }
}

fn post_order(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/order")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn widget_order() -> serde_json::Value {
    serde_json::json!({
        "items": [{
            "product_id": "SKU-001",
            "product_name": "Widget",
            "quantity": 2,
            "unit_price_cents": 1000
        }]
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = setup();

    let response = app.router.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["orders"], 0);
}

#[tokio::test]
async fn test_create_order() {
    let app = setup();

    let response = app.router.oneshot(post_order(widget_order())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].as_str().is_some());
    assert_eq!(json["total_cents"], 2000);
    assert_eq!(json["items"][0]["product_id"], "SKU-001");
}

#[tokio::test]
async fn test_create_order_publishes_event() {
    let app = setup();

    let response = app.router.oneshot(post_order(widget_order())).await.unwrap();
    let json = body_json(response).await;

    let published = app.broker.published();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].exchange, "amq.direct");
    assert_eq!(published[0].content_type, "application/json");
    let payload: serde_json::Value = serde_json::from_slice(&published[0].body).unwrap();
    assert_eq!(payload["id"], json["id"]);
}

#[tokio::test]
async fn test_create_then_list() {
    let app = setup();

    let created = app
        .router
        .clone()
        .oneshot(post_order(widget_order()))
        .await
        .unwrap();
    let created = body_json(created).await;

    let response = app.router.oneshot(get("/order")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let orders = json.as_array().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0]["id"], created["id"]);
}

#[tokio::test]
async fn test_list_empty() {
    let app = setup();

    let response = app.router.oneshot(get("/order")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_empty_order_is_bad_request() {
    let app = setup();

    let response = app
        .router
        .oneshot(post_order(serde_json::json!({ "items": [] })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("no items"));
    assert_eq!(app.broker.published_count(), 0);
}

#[tokio::test]
async fn test_overflowing_total_is_bad_request() {
    let app = setup();
    let body = serde_json::json!({
        "items": [{
            "product_id": "SKU-001",
            "product_name": "Widget",
            "quantity": 2,
            "unit_price_cents": i64::MAX / 2 + 1
        }]
    });

    let response = app.router.oneshot(post_order(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("overflows"));
    assert_eq!(app.repository.count().await.unwrap(), 0);
    assert_eq!(app.broker.published_count(), 0);
}

#[tokio::test]
async fn test_store_failure_is_internal_error_without_publish() {
    let app = setup();
    app.repository.set_fail_on_save(true);

    let response = app.router.oneshot(post_order(widget_order())).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.broker.published_count(), 0);
}

#[tokio::test]
async fn test_broker_outage_still_creates_order() {
    let app = setup();
    app.broker.set_unreachable(true);

    let response = app.router.oneshot(post_order(widget_order())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(app.broker.published_count(), 0);
}

#[tokio::test]
async fn test_list_failure_is_internal_error() {
    let app = setup();
    app.repository.set_fail_on_list(true);

    let response = app.router.oneshot(get("/order")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let app = setup();

    let response = app.router.oneshot(get("/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
}
