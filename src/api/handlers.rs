//! Request handlers for the API endpoints.

use axum::Json;
use axum::extract::rejection::JsonRejection;

use super::error::ApiError;
use super::types::HealthResponse;
use crate::dispatch::{self, AllocationPlan, AllocationRequest};

/// Computes a production plan.
///
/// `POST /productionplan` → 200 + plan array
/// Unclassifiable plant or out-of-domain value → 400 + `{"detail"}`
/// Malformed body → 422 + `{"detail"}`
pub async fn production_plan(
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> Result<Json<AllocationPlan>, ApiError> {
    let Json(request) = payload.map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))?;
    let plan = dispatch::production_plan(&request)?;
    Ok(Json(plan))
}

/// `GET /health` → 200 + `{"status": "ok"}`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
