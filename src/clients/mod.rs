//! Type-safe wrappers around [`ServiceClient`](crate::framework::ServiceClient).

pub mod error;
pub mod fulfillment_client;

pub use error::*;
pub use fulfillment_client::*;
