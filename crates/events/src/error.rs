//! Error types for event construction, handlers and broker publishing.

use thiserror::Error;

/// Errors raised while building a [`DomainEvent`](crate::DomainEvent).
#[derive(Debug, Error)]
pub enum EventError {
    /// Events must carry a non-empty name.
    #[error("Event name must not be empty")]
    EmptyName,

    /// The payload could not be converted to JSON.
    #[error("Event payload serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors a handler may return from `handle`.
///
/// The dispatcher logs these and records them in its report; they are never
/// propagated to the code that triggered the dispatch.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Publishing to the broker failed.
    #[error("Publish failed: {0}")]
    Publish(#[from] BrokerError),

    /// The event payload could not be serialized for transport.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other handler-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Errors returned by a [`BrokerChannel`](crate::BrokerChannel).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerError {
    /// The broker could not be reached.
    #[error("Broker unreachable: {0}")]
    Unreachable(String),

    /// The broker refused the message.
    #[error("Broker rejected message: {0}")]
    Rejected(String),
}
