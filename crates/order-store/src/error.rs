use common::OrderId;
use thiserror::Error;

/// Errors that can occur when reading or writing orders.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An order with this id was already saved.
    #[error("Order {0} already exists")]
    Duplicate(OrderId),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Stored line items could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store refused the operation.
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, StoreError>;
