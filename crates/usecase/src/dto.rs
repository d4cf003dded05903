//! Input and output shapes shared by the use cases and the transports.

use chrono::{DateTime, Utc};
use common::OrderId;
use domain::{Money, Order, OrderItem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl From<OrderItemInput> for OrderItem {
    fn from(input: OrderItemInput) -> Self {
        OrderItem::new(
            input.product_id,
            input.product_name,
            input.quantity,
            Money::from_cents(input.unit_price_cents),
        )
    }
}

/// Request to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub items: Vec<OrderItemInput>,
}

impl CreateOrderInput {
    pub fn new(items: Vec<OrderItemInput>) -> Self {
        Self { items }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemOutput {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

/// Projection of a persisted order.
///
/// Returned to callers and carried as the payload of `OrderCreated`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOutput {
    pub id: OrderId,
    pub items: Vec<OrderItemOutput>,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderOutput {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id(),
            items: order
                .items()
                .iter()
                .map(|item| OrderItemOutput {
                    product_id: item.product_id.to_string(),
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price.cents(),
                })
                .collect(),
            total_cents: order.total().cents(),
            created_at: order.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_input_converts_to_domain_item() {
        let item: OrderItem = OrderItemInput {
            product_id: "SKU-001".to_string(),
            product_name: "Widget".to_string(),
            quantity: 3,
            unit_price_cents: 250,
        }
        .into();

        assert_eq!(item.product_id.as_str(), "SKU-001");
        assert_eq!(item.subtotal().map(|m| m.cents()), Some(750));
    }

    #[test]
    fn test_output_projects_order() {
        let order = Order::new(vec![OrderItem::new(
            "SKU-001",
            "Widget",
            2,
            Money::from_cents(1000),
        )])
        .unwrap();

        let output = OrderOutput::from(&order);

        assert_eq!(output.id, order.id());
        assert_eq!(output.total_cents, 2000);
        assert_eq!(output.items.len(), 1);
        assert_eq!(output.items[0].unit_price_cents, 1000);
        assert_eq!(output.created_at, order.created_at());
    }

    #[test]
    fn test_output_serializes_id_as_string() {
        let order = Order::new(vec![OrderItem::new("SKU-1", "W", 1, Money::from_cents(1))]).unwrap();
        let json = serde_json::to_value(OrderOutput::from(&order)).unwrap();
        assert_eq!(json["id"], order.id().to_string());
        assert_eq!(json["total_cents"], 1);
    }
}
