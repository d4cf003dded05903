//! Use case error types.

use domain::OrderError;
use order_store::StoreError;
use thiserror::Error;

/// Errors surfaced to the transport layer.
///
/// Event handler failures are deliberately absent: once an order is stored,
/// notification problems never turn a create into a failure.
#[derive(Debug, Error)]
pub enum UseCaseError {
    /// The request did not describe a valid order.
    #[error("Invalid order: {0}")]
    Validation(#[from] OrderError),

    /// The repository failed; nothing was dispatched.
    #[error("Persistence error: {0}")]
    Store(#[from] StoreError),
}
