//! Create order use case.

use std::sync::Arc;

use domain::{Order, OrderItem};
use events::{DomainEvent, EventDispatcher, ORDER_CREATED};
use order_store::OrderRepository;

use crate::{CreateOrderInput, OrderOutput, UseCaseError};

/// Validates and persists a new order, then announces it with `OrderCreated`.
///
/// The event is dispatched strictly after the repository accepted the
/// order. Dispatch waits for every handler, but nothing a handler does can
/// make this use case fail.
pub struct CreateOrderUseCase<R: OrderRepository> {
    repository: R,
    dispatcher: Arc<EventDispatcher>,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub fn new(repository: R, dispatcher: Arc<EventDispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    #[tracing::instrument(skip(self, input), fields(items = input.items.len()))]
    pub async fn execute(&self, input: CreateOrderInput) -> Result<OrderOutput, UseCaseError> {
        let items: Vec<OrderItem> = input.items.into_iter().map(OrderItem::from).collect();
        let order = Order::new(items)?;

        let order_id = self.repository.save(&order).await?;
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(%order_id, total = %order.total(), "order created");

        let output = OrderOutput::from(&order);

        match DomainEvent::from_serializable(ORDER_CREATED, &output) {
            Ok(event) => {
                let report = self.dispatcher.dispatch(event).await;
                if !report.is_clean() {
                    let failed: Vec<&str> = report.failures().map(|o| o.handler).collect();
                    tracing::warn!(%order_id, ?failed, "OrderCreated handlers failed");
                }
            }
            Err(e) => {
                tracing::error!(%order_id, error = %e, "could not build OrderCreated event");
            }
        }

        Ok(output)
    }
}
