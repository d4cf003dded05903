//! Persistence port for orders.
//!
//! [`OrderRepository`] is the contract the use cases depend on. Two adapters
//! are provided: [`InMemoryOrderRepository`] for tests and local runs, and
//! [`PostgresOrderRepository`] backed by sqlx.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryOrderRepository;
pub use postgres::PostgresOrderRepository;
pub use store::OrderRepository;
