#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Fulfillment
//!
//! > **Split every order line across its suppliers, under a per-supplier cap.**
//!
//! Given an order of product lines, the allocator decides how much each eligible
//! supplier contributes to each line, what it costs, and whether the order as a
//! whole is `FULFILLED` or `FAILED`.
//!
//! ## 🏗️ Allocation Rules
//!
//! - Suppliers are taken in catalog order, each **at most once** per line.
//! - A supplier takes at most `min(100000, floor(0.40 × requested))` units.
//! - Cost of an allocation is `quantity × unit price`; the order total is the sum.
//! - Any line with an unplaced remainder makes the order `FAILED`. Allocations
//!   from every line are still reported.
//! - An unknown product is not an error: the line simply places nothing.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Pure core, concurrent shell
//! [`allocate_line`](allocator::allocate_line) is a pure function.
//! [`OrderAllocator`](allocator::OrderAllocator) runs one tokio task per line, awaits
//! all of them in line order and folds the results on a single task, so no locks
//! are involved.
//!
//! ### 2. Injected, immutable catalog
//! The [`Catalog`](catalog::Catalog) is built once and shared through an `Arc`;
//! tests swap in fixture catalogs.
//!
//! ### 3. Actor hosting
//! The allocator is hosted by a generic [`ServiceActor`](framework::ServiceActor) and
//! reached through a [`FulfillmentClient`](clients::FulfillmentClient). Each request
//! runs on its own task, so orders are processed concurrently.
//!
//! ### 4. Observability
//! `tracing` everywhere, with one span per order keyed by `order_id`.
//! See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - orders, catalog entries and allocation results
//! - [`catalog`] - the read-only product lookup
//! - [`allocator`] - line and order allocation
//! - [`framework`] - generic actor, client and mocks
//! - [`clients`] - the typed fulfillment client
//! - [`lifecycle`] - system startup/shutdown and tracing setup
//! - [`config`] - environment configuration
//! - [`server`] - the HTTP boundary
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:9090/retail-store/v1/order \
//!   -H 'content-type: application/json' \
//!   -d '{"orderId":"o-1","products":[{"productId":"P001","quantity":10}]}'
//! ```

pub mod allocator;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod server;
