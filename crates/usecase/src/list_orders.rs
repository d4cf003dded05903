//! List orders use case.

use order_store::OrderRepository;

use crate::{OrderOutput, UseCaseError};

/// Returns every persisted order, oldest first. Emits no events.
pub struct ListOrdersUseCase<R: OrderRepository> {
    repository: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<OrderOutput>, UseCaseError> {
        let orders = self.repository.list_all().await?;
        tracing::debug!(count = orders.len(), "orders listed");
        Ok(orders.iter().map(OrderOutput::from).collect())
    }
}
