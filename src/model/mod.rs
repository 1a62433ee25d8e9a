//! Pure data structures shared by the catalog, the allocator and the HTTP boundary.

pub mod catalog;
pub mod fulfillment;
pub mod order;

pub use catalog::*;
pub use fulfillment::*;
pub use order::*;
