use std::sync::Arc;

use async_trait::async_trait;
use criterion::{Criterion, criterion_group, criterion_main};
use events::{
    DomainEvent, EventDispatcher, EventHandler, HandlerError, InMemoryBroker, ORDER_CREATED,
    OrderCreatedHandler,
};

struct NoopHandler;

#[async_trait]
impl EventHandler for NoopHandler {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn handle(&self, _event: &DomainEvent) -> Result<(), HandlerError> {
        Ok(())
    }
}

fn order_created() -> DomainEvent {
    DomainEvent::new(
        ORDER_CREATED,
        serde_json::json!({
            "id": "6f1c1a52-3c2b-4b8e-9a43-0d3f4f1f7e10",
            "items": [{"product_id": "SKU-001", "product_name": "Widget", "quantity": 2, "unit_price": 1000}],
            "total_cents": 2000
        }),
    )
    .unwrap()
}

fn bench_dispatch_no_handlers(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let dispatcher = EventDispatcher::new();

    c.bench_function("dispatch/no_handlers", |b| {
        b.iter(|| rt.block_on(dispatcher.dispatch(order_created())));
    });
}

fn bench_dispatch_fan_out(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    for n in [1usize, 8, 64] {
        let mut dispatcher = EventDispatcher::new();
        for _ in 0..n {
            dispatcher.register(ORDER_CREATED, Arc::new(NoopHandler));
        }

        c.bench_function(&format!("dispatch/fan_out_{n}"), |b| {
            b.iter(|| rt.block_on(dispatcher.dispatch(order_created())));
        });
    }
}

fn bench_dispatch_publish(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let broker = InMemoryBroker::new();
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(
        ORDER_CREATED,
        Arc::new(OrderCreatedHandler::new(Arc::new(broker))),
    );

    c.bench_function("dispatch/order_created_publish", |b| {
        b.iter(|| rt.block_on(dispatcher.dispatch(order_created())));
    });
}

criterion_group!(
    benches,
    bench_dispatch_no_handlers,
    bench_dispatch_fan_out,
    bench_dispatch_publish
);
criterion_main!(benches);
