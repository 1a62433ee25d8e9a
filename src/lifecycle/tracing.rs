//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing`
//! crate for the whole service.
//!
//! ## Configuration
//!
//! Verbosity comes from `RUST_LOG` and defaults to `info`. The compact format hides
//! the module prefix (`with_target(false)`) and shows spans inline, e.g.
//! `allocate{order_id="o-1" lines=2}: Order processed`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown and the number of requests handled
//! - **Orders**: One span per order keyed by `order_id`, with status, total cost
//!   and allocation count once processed
//! - **Lines**: A warning for every line left with a remaining quantity
//! - **HTTP**: Request/response spans from `tower-http`'s `TraceLayer`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Outcomes only (default)
//! cargo run
//!
//! # Full order payloads at function entry
//! RUST_LOG=debug cargo run
//!
//! # Only the allocator, verbosely
//! RUST_LOG=order_fulfillment::allocator=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the entry points log their payload once using the `?`
//! (Debug) field syntax:
//!
//! ```rust,ignore
//! debug!(?order, "allocate called");
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Spans already say where we are
        .compact()
        .init();
}
