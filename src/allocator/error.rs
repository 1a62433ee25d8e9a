//! Error types for the order allocator.

use thiserror::Error;

/// Errors that can occur while allocating an order.
///
/// Unknown products, missing suppliers and capped lines are not errors: they
/// come back as a `FAILED` [`OrderResult`](crate::model::OrderResult).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AllocatorError {
    /// A line allocation task panicked or was cancelled before producing a result.
    #[error("Allocation task for {product_id} failed: {reason}")]
    LineTaskFailed { product_id: String, reason: String },
}
