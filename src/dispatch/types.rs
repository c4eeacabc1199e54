//! Core dispatch types: requests, costed plants, and allocation plans.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AllocationError;
use crate::plants::{FuelPrices, PlantSpec, PowerPlant};

/// One production planning request.
///
/// Deserializes from the wire shape:
///
/// ```
/// use production_plan::dispatch::types::AllocationRequest;
///
/// let request: AllocationRequest = serde_json::from_str(r#"{
///     "load": 100,
///     "fuels": {"gas(euro/MWh)": 13.4, "kerosine(euro/MWh)": 50.8, "co2(euro/ton)": 20, "wind(%)": 60},
///     "powerplants": [{"name": "gas1", "type": "gasfired", "efficiency": 0.5, "pmin": 0, "pmax": 200}]
/// }"#).unwrap();
/// assert_eq!(request.plants.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRequest {
    /// Total output required (MW).
    pub load: f64,
    /// Fuel prices and wind availability.
    pub fuels: FuelPrices,
    /// Plants in the order received; the order carries no meaning.
    #[serde(rename = "powerplants")]
    pub plants: Vec<PowerPlant>,
}

impl AllocationRequest {
    /// Creates a request.
    pub fn new(load: f64, fuels: FuelPrices, plants: Vec<PowerPlant>) -> Self {
        Self {
            load,
            fuels,
            plants,
        }
    }

    /// Checks request-level values. Plant limits are checked when each plant
    /// is classified.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if `load` is negative or not finite, or if
    /// wind availability is outside `[0, 100]`.
    pub fn validate(&self) -> Result<(), AllocationError> {
        if !(self.load >= 0.0 && self.load.is_finite()) {
            return Err(AllocationError::InvalidRequest {
                field: "load",
                reason: format!("must be a finite value >= 0, got {}", self.load),
            });
        }
        if !(0.0..=100.0).contains(&self.fuels.wind) {
            return Err(AllocationError::InvalidRequest {
                field: "fuels.wind(%)",
                reason: format!("must be in [0, 100], got {}", self.fuels.wind),
            });
        }
        let prices = [
            ("fuels.gas(euro/MWh)", self.fuels.gas),
            ("fuels.kerosine(euro/MWh)", self.fuels.kerosine),
            ("fuels.co2(euro/ton)", self.fuels.co2),
        ];
        for (field, price) in prices {
            if !price.is_finite() {
                return Err(AllocationError::InvalidRequest {
                    field,
                    reason: format!("must be finite, got {price}"),
                });
            }
        }
        Ok(())
    }
}

/// A classified plant annotated with its marginal cost (euro/MWh).
///
/// Derived per request and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CostedPlant {
    pub spec: PlantSpec,
    pub cost: f64,
}

impl CostedPlant {
    pub fn new(spec: PlantSpec, cost: f64) -> Self {
        Self { spec, cost }
    }
}

/// Power assigned to one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationEntry {
    /// Plant identifier.
    pub name: String,
    /// Assigned output (MW), rounded to one decimal.
    pub p: f64,
}

impl AllocationEntry {
    pub fn new(name: impl Into<String>, p: f64) -> Self {
        Self {
            name: name.into(),
            p,
        }
    }
}

impl fmt::Display for AllocationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<24} {:>8.1} MW", self.name, self.p)
    }
}

/// Ordered allocation result, one entry per plant considered in merit order.
///
/// Plants past the point where the load was covered are absent, not zero.
/// Serializes as a bare JSON array of `{"name", "p"}` objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan {
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, entry: AllocationEntry) {
        self.entries.push(entry);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AllocationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the published (rounded) outputs (MW).
    pub fn total_power(&self) -> f64 {
        self.entries.iter().map(|e| e.p).sum()
    }

    /// Assigned output of the named plant, if it appears in the plan.
    pub fn power_of(&self, name: &str) -> Option<f64> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.p)
    }

    pub fn into_entries(self) -> Vec<AllocationEntry> {
        self.entries
    }
}

impl From<Vec<AllocationEntry>> for AllocationPlan {
    fn from(entries: Vec<AllocationEntry>) -> Self {
        Self { entries }
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a AllocationEntry;
    type IntoIter = std::slice::Iter<'a, AllocationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
