use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::OrderId;
use domain::Order;
use tokio::sync::RwLock;

use crate::{OrderRepository, Result, StoreError};

/// In-memory order repository.
///
/// Cloning yields another handle to the same storage. Failure injection
/// switches let tests exercise the error paths of the use cases.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    fail_on_save: Arc<AtomicBool>,
    fail_on_list: Arc<AtomicBool>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `save` fail with [`StoreError::Unavailable`].
    pub fn set_fail_on_save(&self, fail: bool) {
        self.fail_on_save.store(fail, Ordering::SeqCst);
    }

    /// Makes every subsequent `list_all` fail with [`StoreError::Unavailable`].
    pub fn set_fail_on_list(&self, fail: bool) {
        self.fail_on_list.store(fail, Ordering::SeqCst);
    }

    /// Returns the stored order with the given id, if any.
    pub async fn get(&self, id: OrderId) -> Option<Order> {
        self.orders
            .read()
            .await
            .iter()
            .find(|o| o.id() == id)
            .cloned()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<OrderId> {
        if self.fail_on_save.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("save rejected".to_string()));
        }

        let mut orders = self.orders.write().await;
        if orders.iter().any(|o| o.id() == order.id()) {
            return Err(StoreError::Duplicate(order.id()));
        }
        orders.push(order.clone());

        Ok(order.id())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        if self.fail_on_list.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("list rejected".to_string()));
        }

        let mut orders = self.orders.read().await.clone();
        // Stable sort: equal timestamps keep insertion order.
        orders.sort_by_key(|o| o.created_at());
        Ok(orders)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.orders.read().await.len())
    }
}
