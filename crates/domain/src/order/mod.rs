//! Order entity and related types.

mod entity;
mod value_objects;

pub use entity::Order;
pub use value_objects::{Money, OrderItem, ProductId};

use thiserror::Error;

/// Errors raised while validating a new order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Order has no items.
    #[error("Order has no items")]
    NoItems,

    /// An item is missing its product identifier.
    #[error("Product ID is required for every item")]
    ProductIdRequired,

    /// Invalid quantity.
    #[error("Invalid quantity for {product_id}: {quantity} (must be greater than 0)")]
    InvalidQuantity { product_id: String, quantity: u32 },

    /// Invalid price.
    #[error("Invalid price for {product_id}: {price} (must be greater than 0)")]
    InvalidPrice { product_id: String, price: i64 },

    /// The order total does not fit in an `i64` number of cents.
    #[error("Order total overflows")]
    TotalOverflow,
}
