//! Broker publish port, a logging sink and an in-memory implementation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::BrokerError;

/// A message handed to the broker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Publishing {
    pub exchange: String,
    pub routing_key: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

/// One-way publish channel to a message broker.
///
/// Publishing is fire-and-forget: an `Ok` means the broker accepted the
/// message for delivery, not that any consumer received it. Implementations
/// must be safe to share between concurrently running handlers.
#[async_trait]
pub trait BrokerChannel: Send + Sync {
    /// Publishes a message on the channel.
    async fn publish(&self, message: Publishing) -> Result<(), BrokerError>;
}

/// Broker channel that logs each message and then drops it.
///
/// Holds no state, so memory use does not grow with the number of
/// messages. Used by the service binary until a network broker is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingBroker;

impl LoggingBroker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BrokerChannel for LoggingBroker {
    async fn publish(&self, message: Publishing) -> Result<(), BrokerError> {
        tracing::info!(
            exchange = %message.exchange,
            routing_key = %message.routing_key,
            content_type = %message.content_type,
            bytes = message.body.len(),
            "message published"
        );
        Ok(())
    }
}

#[derive(Debug, Default)]
struct InMemoryBrokerState {
    published: Vec<Publishing>,
}

/// In-memory broker channel.
///
/// Records every accepted message and never forgets one, so it is meant for
/// tests. Cloning yields another handle to the same channel.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<Mutex<InMemoryBrokerState>>,
    unreachable: Arc<AtomicBool>,
}

impl InMemoryBroker {
    /// Creates a new in-memory broker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent publishes fail with [`BrokerError::Unreachable`].
    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Returns a copy of every message accepted so far.
    pub fn published(&self) -> Vec<Publishing> {
        self.lock().published.clone()
    }

    /// Returns the number of messages accepted so far.
    pub fn published_count(&self) -> usize {
        self.lock().published.len()
    }

    fn lock(&self) -> MutexGuard<'_, InMemoryBrokerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BrokerChannel for InMemoryBroker {
    async fn publish(&self, message: Publishing) -> Result<(), BrokerError> {
        if self.unreachable.load(Ordering::SeqCst) {
            return Err(BrokerError::Unreachable("in-memory broker offline".to_string()));
        }

        tracing::trace!(
            exchange = %message.exchange,
            routing_key = %message.routing_key,
            bytes = message.body.len(),
            "message accepted"
        );
        self.lock().published.push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(body: &str) -> Publishing {
        Publishing {
            exchange: "amq.direct".to_string(),
            routing_key: String::new(),
            content_type: "application/json".to_string(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[tokio::test]
    async fn test_publish_records_message() {
        let broker = InMemoryBroker::new();
        broker.publish(message("{}")).await.unwrap();

        assert_eq!(broker.published_count(), 1);
        assert_eq!(broker.published()[0], message("{}"));
    }

    #[tokio::test]
    async fn test_unreachable_broker_rejects() {
        let broker = InMemoryBroker::new();
        broker.set_unreachable(true);

        let err = broker.publish(message("{}")).await.unwrap_err();
        assert!(matches!(err, BrokerError::Unreachable(_)));
        assert_eq!(broker.published_count(), 0);

        broker.set_unreachable(false);
        broker.publish(message("{}")).await.unwrap();
        assert_eq!(broker.published_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_channel() {
        let broker = InMemoryBroker::new();
        let handle = broker.clone();
        handle.publish(message("a")).await.unwrap();
        assert_eq!(broker.published_count(), 1);
    }

    #[tokio::test]
    async fn test_logging_broker_accepts_and_keeps_nothing() {
        let broker = LoggingBroker::new();
        for i in 0..100 {
            broker.publish(message(&i.to_string())).await.unwrap();
        }
        assert_eq!(std::mem::size_of::<LoggingBroker>(), 0);
    }
}
