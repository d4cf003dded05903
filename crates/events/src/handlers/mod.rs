//! Concrete event handlers.

mod order_created;

pub use order_created::OrderCreatedHandler;
