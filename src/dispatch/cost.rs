//! Marginal cost model per plant kind.

use super::error::AllocationError;
use super::types::CostedPlant;
use crate::plants::fuels::GAS_CO2_TONS_PER_MWH;
use crate::plants::{FuelPrices, PlantSpec, PowerPlant};

/// Marginal cost (euro/MWh) of producing with `plant` under `fuels`.
///
/// * Wind: free.
/// * Gas-fired: fuel cost through the efficiency, plus CO2 allowances for
///   0.3 ton emitted per MWh.
/// * Turbojet: kerosine cost through the efficiency.
pub fn marginal_cost(plant: &PlantSpec, fuels: &FuelPrices) -> f64 {
    match plant {
        PlantSpec::WindTurbine { .. } => 0.0,
        PlantSpec::GasFired { efficiency, .. } => {
            fuels.gas / efficiency + GAS_CO2_TONS_PER_MWH * fuels.co2
        }
        PlantSpec::TurboJet { efficiency, .. } => fuels.kerosine / efficiency,
    }
}

/// Classifies a request record and returns its marginal cost.
///
/// # Errors
///
/// Propagates classification failures (`UnknownPlantType`,
/// `InvalidPlantSpec`) from [`PlantSpec::try_from`].
pub fn cost(plant: &PowerPlant, fuels: &FuelPrices) -> Result<f64, AllocationError> {
    PlantSpec::try_from(plant).map(|spec| marginal_cost(&spec, fuels))
}

/// Classifies and prices every plant, keeping request order.
///
/// # Errors
///
/// Fails on the first plant that cannot be classified.
pub fn cost_plants(
    plants: &[PowerPlant],
    fuels: &FuelPrices,
) -> Result<Vec<CostedPlant>, AllocationError> {
    plants
        .iter()
        .map(|plant| {
            let spec = PlantSpec::try_from(plant)?;
            let cost = marginal_cost(&spec, fuels);
            Ok(CostedPlant::new(spec, cost))
        })
        .collect()
}
