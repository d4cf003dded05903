use async_trait::async_trait;
use common::OrderId;
use domain::Order;

use crate::Result;

/// Persistence contract consumed by the order use cases.
///
/// Implementations must be thread-safe (Send + Sync); the use cases share a
/// single repository across all requests.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new order and returns its id.
    ///
    /// Fails with [`StoreError::Duplicate`](crate::StoreError::Duplicate) if
    /// an order with the same id is already stored.
    async fn save(&self, order: &Order) -> Result<OrderId>;

    /// Returns every stored order, oldest first.
    async fn list_all(&self) -> Result<Vec<Order>>;

    /// Returns the number of stored orders.
    async fn count(&self) -> Result<usize>;
}
