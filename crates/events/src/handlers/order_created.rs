use std::sync::Arc;

use async_trait::async_trait;

use crate::{BrokerChannel, DomainEvent, EventHandler, HandlerError, Publishing};

/// Publishes the payload of `OrderCreated` events to the broker as JSON.
///
/// Publishes once per event with no retry. A failed publish is logged and
/// returned to the dispatcher, which keeps it away from the order write path.
pub struct OrderCreatedHandler {
    channel: Arc<dyn BrokerChannel>,
    exchange: String,
    routing_key: String,
}

impl OrderCreatedHandler {
    pub const DEFAULT_EXCHANGE: &'static str = "amq.direct";
    pub const CONTENT_TYPE: &'static str = "application/json";

    /// Creates a handler publishing to `amq.direct` with an empty routing key.
    pub fn new(channel: Arc<dyn BrokerChannel>) -> Self {
        Self {
            channel,
            exchange: Self::DEFAULT_EXCHANGE.to_string(),
            routing_key: String::new(),
        }
    }

    /// Overrides the exchange and routing key.
    pub fn with_route(mut self, exchange: impl Into<String>, routing_key: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self.routing_key = routing_key.into();
        self
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn routing_key(&self) -> &str {
        &self.routing_key
    }
}

#[async_trait]
impl EventHandler for OrderCreatedHandler {
    fn name(&self) -> &'static str {
        "order_created_publisher"
    }

    #[tracing::instrument(skip(self, event), fields(exchange = %self.exchange))]
    async fn handle(&self, event: &DomainEvent) -> Result<(), HandlerError> {
        tracing::info!(payload = %event.payload(), "order created");

        let body = serde_json::to_vec(event.payload())?;
        let message = Publishing {
            exchange: self.exchange.clone(),
            routing_key: self.routing_key.clone(),
            content_type: Self::CONTENT_TYPE.to_string(),
            body,
        };

        self.channel.publish(message).await.map_err(|e| {
            tracing::warn!(error = %e, "failed to publish order created event");
            HandlerError::Publish(e)
        })
    }
}
