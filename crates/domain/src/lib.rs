//! Domain layer for the order service.
//!
//! Holds the `Order` entity together with its value objects. Orders are
//! validated once at construction and are immutable afterwards; persistence
//! and event dispatch live in the `order-store` and `events` crates.

pub mod order;

pub use common::OrderId;
pub use order::{Money, Order, OrderError, OrderItem, ProductId};
