//! Generic actor framework for hosting request/response services.
//!
//! # Main Components
//!
//! - [`ActorService`] - Trait that services implement to be hosted by an actor
//! - [`ServiceActor`] - Generic actor that runs each request on its own task
//! - [`ServiceClient`] - Type-safe, cloneable handle for sending requests
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning the real service.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
