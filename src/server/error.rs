//! HTTP error mapping.

use crate::clients::FulfillmentError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors returned by the HTTP handlers, rendered as `{"error": message}`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The body could not be decoded into an order.
    #[error("Invalid request")]
    InvalidRequest,

    #[error("Service unavailable")]
    Unavailable,

    #[error("Request timed out")]
    Timeout,

    #[error("Internal error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest => StatusCode::BAD_REQUEST,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FulfillmentError> for ApiError {
    fn from(e: FulfillmentError) -> Self {
        match e {
            FulfillmentError::Unavailable(_) => ApiError::Unavailable,
            FulfillmentError::Allocation(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
