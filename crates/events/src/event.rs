//! Domain event type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::EventError;

/// Name of the event emitted after an order has been persisted.
pub const ORDER_CREATED: &str = "OrderCreated";

/// An immutable record of a completed state change.
///
/// Events are created right after a successful write, handed to the
/// dispatcher once and dropped when the dispatch returns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainEvent {
    name: String,
    payload: serde_json::Value,
    occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    /// Creates an event with an already-structured payload.
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Result<Self, EventError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EventError::EmptyName);
        }

        Ok(Self {
            name,
            payload,
            occurred_at: Utc::now(),
        })
    }

    /// Creates an event whose payload is the JSON form of `payload`.
    pub fn from_serializable<T: Serialize>(
        name: impl Into<String>,
        payload: &T,
    ) -> Result<Self, EventError> {
        Self::new(name, serde_json::to_value(payload)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &serde_json::Value {
        &self.payload
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
