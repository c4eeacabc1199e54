//! Greedy merit-order scheduler.

use std::cmp::Ordering;

use tracing::debug;

use super::cost::cost_plants;
use super::error::AllocationError;
use super::types::{AllocationEntry, AllocationPlan};
use crate::plants::{FuelPrices, PlantSpec, PowerPlant};

/// Assigns output to plants cheapest-first until `load` is covered.
///
/// Plants are stable-sorted by marginal cost, so equal-cost plants keep
/// their request order. Iteration stops right after the assignment that
/// brings the remaining load to zero or below; later plants are left out of
/// the plan. If the fleet cannot cover the load, the plan simply sums to
/// less than `load`.
///
/// # Arguments
///
/// * `load` - Total output required (MW)
/// * `fuels` - Fuel prices and wind availability
/// * `plants` - Plants in request order
///
/// # Errors
///
/// Returns an error if any plant cannot be classified; no partial plan is
/// produced.
pub fn allocate(
    load: f64,
    fuels: &FuelPrices,
    plants: &[PowerPlant],
) -> Result<AllocationPlan, AllocationError> {
    let mut costed = cost_plants(plants, fuels)?;
    // Zero costs of either sign compare equal so request order decides.
    costed.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    let mut remaining_load = load;
    let mut plan = AllocationPlan::with_capacity(costed.len());

    for plant in &costed {
        let power = dispatch_power(&plant.spec, remaining_load, fuels);
        debug!(
            plant = plant.spec.name(),
            kind = %plant.spec.kind(),
            cost = plant.cost,
            remaining_load,
            power,
            "dispatched"
        );

        plan.push(AllocationEntry::new(plant.spec.name(), round_output(power)));
        // The unrounded output feeds the remainder; rounding is for display.
        remaining_load -= power;

        if remaining_load <= 0.0 {
            break;
        }
    }

    Ok(plan)
}

/// Output of a single plant given the load still to cover.
///
/// Wind delivers `pmax * wind%` regardless of the remaining load. A fueled
/// plant takes `min(remaining, pmax)` when the remainder reaches its `pmin`,
/// and stays off otherwise.
pub fn dispatch_power(plant: &PlantSpec, remaining_load: f64, fuels: &FuelPrices) -> f64 {
    match plant {
        PlantSpec::WindTurbine { pmax, .. } => pmax * fuels.wind_fraction(),
        PlantSpec::GasFired { pmin, pmax, .. } | PlantSpec::TurboJet { pmin, pmax, .. } => {
            if remaining_load >= *pmin {
                remaining_load.min(*pmax)
            } else {
                0.0
            }
        }
    }
}

/// Rounds an output to one decimal.
///
/// Rounds the exact binary value, so `0.45` (slightly above the midpoint)
/// goes up and `0.35` (slightly below) goes down. Exact ties go to even.
pub fn round_output(power: f64) -> f64 {
    // Scaling by 10 first would turn near-midpoint values into false ties.
    format!("{power:.1}").parse().unwrap_or(power)
}
