use super::error::ApiError;
use super::AppState;
use crate::model::{Order, OrderResult};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

/// `POST /retail-store/v1/order`
///
/// A `FAILED` order is still a `200`; only undecodable bodies and allocator
/// outages are errors.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Order>, JsonRejection>,
) -> Result<Json<OrderResult>, ApiError> {
    let Json(order) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected order request");
        ApiError::InvalidRequest
    })?;

    let result = tokio::time::timeout(state.request_timeout, state.client.fulfill_order(order))
        .await
        .map_err(|_| {
            error!(timeout_ms = state.request_timeout.as_millis() as u64, "Order timed out");
            ApiError::Timeout
        })??;

    Ok(Json(result))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    products: usize,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        products: state.catalog.len(),
    })
}
