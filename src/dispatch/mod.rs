/// Marginal cost model.
pub mod cost;
pub mod error;
/// Greedy merit-order scheduler.
pub mod merit_order;
pub mod summary;
pub mod types;

use tracing::{info, instrument, warn};

pub use cost::{cost, marginal_cost};
pub use error::AllocationError;
pub use merit_order::allocate;
pub use summary::PlanSummary;
pub use types::{AllocationEntry, AllocationPlan, AllocationRequest, CostedPlant};

/// Validates a request and computes its production plan.
///
/// This is the single entry point used by the HTTP and CLI boundaries. A
/// plan that does not cover the load is still returned; the shortfall is
/// logged as a warning.
///
/// # Errors
///
/// Returns `InvalidRequest` for out-of-domain request values, or any
/// classification error raised while costing the plants.
#[instrument(skip_all, fields(load = request.load, plants = request.plants.len()))]
pub fn production_plan(request: &AllocationRequest) -> Result<AllocationPlan, AllocationError> {
    request.validate()?;
    let plan = allocate(request.load, &request.fuels, &request.plants)?;

    let summary = PlanSummary::new(request.load, &plan);
    if !summary.is_covered() {
        warn!(
            shortfall_mw = summary.shortfall_mw,
            total_mw = summary.total_mw,
            "plan does not cover the load"
        );
    }
    info!(
        entries = plan.len(),
        committed = summary.committed,
        total_mw = summary.total_mw,
        "production plan computed"
    );

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plants::{FuelPrices, PowerPlant};

    #[test]
    fn rejects_invalid_request_before_allocating() {
        let request = AllocationRequest::new(
            100.0,
            FuelPrices::new(13.4, 50.8, 20.0, 150.0),
            vec![PowerPlant::new("wind1", "windturbine", 1.0, 0.0, 100.0)],
        );
        assert!(matches!(
            production_plan(&request),
            Err(AllocationError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn under_supply_is_returned_not_raised() {
        let request = AllocationRequest::new(
            500.0,
            FuelPrices::new(13.4, 50.8, 20.0, 0.0),
            vec![PowerPlant::new("gas1", "gasfired", 0.5, 0.0, 100.0)],
        );
        let plan = production_plan(&request).expect("under-supply is not an error");
        assert_eq!(plan.power_of("gas1"), Some(100.0));
    }
}
