//! Error types for the fulfillment client.

use thiserror::Error;

/// Errors a caller of [`FulfillmentClient`](super::FulfillmentClient) can see.
///
/// A `FAILED` order is not an error; it is a successful call whose
/// [`OrderResult`](crate::model::OrderResult) says so.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FulfillmentError {
    /// The allocator actor is not running.
    #[error("Allocator unavailable: {0}")]
    Unavailable(String),

    /// The allocator accepted the order but could not produce a result.
    #[error("Allocation failed: {0}")]
    Allocation(String),
}
