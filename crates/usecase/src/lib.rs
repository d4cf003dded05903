//! Application use cases for orders.
//!
//! Every transport front end calls these the same way:
//! - [`CreateOrderUseCase`] validates, persists, then dispatches `OrderCreated`
//! - [`ListOrdersUseCase`] returns every persisted order

pub mod create_order;
pub mod dto;
pub mod error;
pub mod list_orders;

pub use create_order::CreateOrderUseCase;
pub use dto::{CreateOrderInput, OrderItemInput, OrderItemOutput, OrderOutput};
pub use error::UseCaseError;
pub use list_orders::ListOrdersUseCase;
