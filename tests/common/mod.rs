//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use production_plan::dispatch::AllocationRequest;
use production_plan::plants::{FuelPrices, PowerPlant};

/// Fuel prices used by the reference payloads, with the given wind percentage.
pub fn reference_fuels(wind: f64) -> FuelPrices {
    FuelPrices::new(13.4, 50.8, 20.0, wind)
}

/// Gas at 20 EUR/MWh, kerosine at 50 EUR/MWh, no carbon price.
pub fn flat_fuels(wind: f64) -> FuelPrices {
    FuelPrices::new(20.0, 50.0, 0.0, wind)
}

/// Mixed fleet: one wind park, two gas plants of differing efficiency and
/// a turbojet.
pub fn mixed_fleet() -> Vec<PowerPlant> {
    vec![
        PowerPlant::new("gas_efficient", "gasfired", 0.55, 50.0, 200.0),
        PowerPlant::new("wind", "windturbine", 1.0, 0.0, 100.0),
        PowerPlant::new("gas_old", "gasfired", 0.35, 20.0, 150.0),
        PowerPlant::new("jet", "turbojet", 0.3, 0.0, 40.0),
    ]
}

/// Request over [`mixed_fleet`] with flat fuel prices.
pub fn mixed_request(load: f64, wind: f64) -> AllocationRequest {
    AllocationRequest::new(load, flat_fuels(wind), mixed_fleet())
}

/// Sum of plan outputs.
pub fn total(plan: &production_plan::dispatch::AllocationPlan) -> f64 {
    plan.iter().map(|e| e.p).sum()
}
