//! Order entity.

use chrono::{DateTime, SubsecRound, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{Money, OrderError, OrderItem};

/// A placed order.
///
/// An order is validated once in [`Order::new`] and never mutated after
/// that. The total is computed at construction and stored alongside the
/// items so persisted orders keep the total they were created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<OrderItem>,
    total: Money,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Builds a new order from its line items.
    ///
    /// Fails if the order is empty, if any line has a blank product id,
    /// a zero quantity or a non-positive unit price, or if the total
    /// overflows. `created_at` is kept at microsecond precision so it
    /// survives a round trip through `TIMESTAMPTZ`.
    pub fn new(items: Vec<OrderItem>) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }

        for item in &items {
            if item.product_id.is_blank() {
                return Err(OrderError::ProductIdRequired);
            }
            if item.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    product_id: item.product_id.to_string(),
                    quantity: item.quantity,
                });
            }
            if !item.unit_price.is_positive() {
                return Err(OrderError::InvalidPrice {
                    product_id: item.product_id.to_string(),
                    price: item.unit_price.cents(),
                });
            }
        }

        let total = items
            .iter()
            .try_fold(Money::zero(), |acc, item| {
                item.subtotal().and_then(|line| acc.checked_add(line))
            })
            .ok_or(OrderError::TotalOverflow)?;

        Ok(Self {
            id: OrderId::new(),
            items,
            total,
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    /// Rebuilds an order that was already persisted. No validation is done.
    pub fn restore(
        id: OrderId,
        items: Vec<OrderItem>,
        total: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            items,
            total,
            created_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
