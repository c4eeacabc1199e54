//! API response types not shared with the core.
//!
//! Requests and plans use the core types directly; their serde shape is the
//! wire contract.

use serde::Serialize;

/// Error response body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure reason.
    pub detail: String,
}

/// Liveness response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
