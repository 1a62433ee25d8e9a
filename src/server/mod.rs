//! HTTP boundary adapter.
//!
//! Decodes orders from JSON, passes them to the allocator through a
//! [`FulfillmentClient`] and encodes the [`OrderResult`](crate::model::OrderResult).
//!
//! | Route | Handler |
//! |---|---|
//! | `POST /retail-store/v1/order` | [`handlers::create_order`] |
//! | `GET /health` | [`handlers::health`] |

pub mod error;
pub mod handlers;

pub use error::*;

use crate::catalog::Catalog;
use crate::clients::FulfillmentClient;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::trace::TraceLayer;

/// Path of the order endpoint.
pub const ORDER_PATH: &str = "/retail-store/v1/order";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub client: FulfillmentClient,
    pub catalog: Arc<Catalog>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(client: FulfillmentClient, catalog: Arc<Catalog>, request_timeout: Duration) -> Self {
        Self {
            client,
            catalog,
            request_timeout,
        }
    }
}

/// Builds the application router with HTTP tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(ORDER_PATH, post(handlers::create_order))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
