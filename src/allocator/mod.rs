//! Order fulfillment allocation.
//!
//! - [`line`] - the pure per-line algorithm ([`allocate_line`], [`per_supplier_cap`])
//! - [`order`] - [`OrderAllocator`], which fans lines out to tokio tasks and folds
//!   the results into an [`OrderResult`](crate::model::OrderResult)
//! - [`error`] - [`AllocatorError`]
//!
//! ## Allocation rules
//!
//! For each line, every eligible supplier is offered at most
//! `min(100000, floor(0.40 × requested))` units, once, in catalog order. A line
//! that is not fully placed after the last supplier makes the whole order
//! `FAILED`, but its partial allocations are still reported and costed.

pub mod error;
pub mod line;
pub mod order;

pub use error::*;
pub use line::*;
pub use order::*;
