use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::dispatch::AllocationError;

/// Errors returned from API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request parsed but cannot be allocated.
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// The body is not a well-formed request.
    #[error("{0}")]
    InvalidPayload(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Allocation(_) => StatusCode::BAD_REQUEST,
            Self::InvalidPayload(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, %status, "request rejected");
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
