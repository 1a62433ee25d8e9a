//! # System Lifecycle
//!
//! Starting, wiring and shutting down the service's moving parts.
//!
//! - [`FulfillmentSystem`] wraps the catalog in an `Arc`, hosts the
//!   [`OrderAllocator`](crate::allocator::OrderAllocator) in a
//!   [`ServiceActor`](crate::framework::ServiceActor) and hands out a
//!   [`FulfillmentClient`](crate::clients::FulfillmentClient).
//! - [`setup_tracing`] installs the global `tracing` subscriber.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the HTTP router's clone goes away when the server
//!    stops, then [`FulfillmentSystem::shutdown`] drops its own
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **In-flight orders finish** - the actor drains its task set
//! 4. **Await completion** - `shutdown` joins the actor task

pub mod fulfillment_system;
pub mod tracing;

pub use self::fulfillment_system::*;
pub use self::tracing::*;
