//! Request-level plant records and their classification into known kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatch::error::AllocationError;

/// A power plant exactly as received in a request.
///
/// The `type` tag stays a free string at this level; [`PlantSpec::try_from`]
/// maps it onto one of the known kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Plant identifier, echoed back in the plan.
    pub name: String,
    /// Wire type tag (`"gasfired"`, `"turbojet"`, `"windturbine"`).
    #[serde(rename = "type")]
    pub plant_type: String,
    /// Fuel-to-electricity conversion efficiency (ignored for wind).
    #[serde(default)]
    pub efficiency: f64,
    /// Minimum stable output when committed (MW, ignored for wind).
    #[serde(default)]
    pub pmin: f64,
    /// Maximum output (MW).
    pub pmax: f64,
}

impl PowerPlant {
    /// Creates a plant record.
    pub fn new(
        name: impl Into<String>,
        plant_type: impl Into<String>,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    ) -> Self {
        Self {
            name: name.into(),
            plant_type: plant_type.into(),
            efficiency,
            pmin,
            pmax,
        }
    }
}

/// Known plant kinds, keyed by their wire tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantKind {
    WindTurbine,
    GasFired,
    TurboJet,
}

impl PlantKind {
    /// All kinds, in tag order.
    pub const ALL: [Self; 3] = [Self::GasFired, Self::TurboJet, Self::WindTurbine];

    /// Wire tag of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::WindTurbine => "windturbine",
            Self::GasFired => "gasfired",
            Self::TurboJet => "turbojet",
        }
    }

    /// Looks up a kind by its wire tag (exact match).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for PlantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A classified and validated plant.
///
/// Wind turbines carry no fuel parameters: their output is set by wind
/// availability alone, so `pmin` and `efficiency` are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum PlantSpec {
    WindTurbine {
        name: String,
        pmax: f64,
    },
    GasFired {
        name: String,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    },
    TurboJet {
        name: String,
        efficiency: f64,
        pmin: f64,
        pmax: f64,
    },
}

impl PlantSpec {
    /// Plant identifier.
    pub fn name(&self) -> &str {
        match self {
            Self::WindTurbine { name, .. }
            | Self::GasFired { name, .. }
            | Self::TurboJet { name, .. } => name,
        }
    }

    pub fn kind(&self) -> PlantKind {
        match self {
            Self::WindTurbine { .. } => PlantKind::WindTurbine,
            Self::GasFired { .. } => PlantKind::GasFired,
            Self::TurboJet { .. } => PlantKind::TurboJet,
        }
    }

    /// Minimum stable output (MW); always 0 for wind.
    pub fn pmin(&self) -> f64 {
        match self {
            Self::WindTurbine { .. } => 0.0,
            Self::GasFired { pmin, .. } | Self::TurboJet { pmin, .. } => *pmin,
        }
    }

    /// Maximum output (MW).
    pub fn pmax(&self) -> f64 {
        match self {
            Self::WindTurbine { pmax, .. }
            | Self::GasFired { pmax, .. }
            | Self::TurboJet { pmax, .. } => *pmax,
        }
    }
}

impl TryFrom<&PowerPlant> for PlantSpec {
    type Error = AllocationError;

    /// Classifies a record by its type tag and checks its operating limits.
    ///
    /// # Errors
    ///
    /// * `UnknownPlantType` if the tag is not a known kind
    /// * `InvalidPlantSpec` if `pmax < 0`, or, for fueled plants,
    ///   `efficiency <= 0` or `pmin > pmax`
    fn try_from(plant: &PowerPlant) -> Result<Self, Self::Error> {
        let kind = PlantKind::from_tag(&plant.plant_type).ok_or_else(|| {
            AllocationError::UnknownPlantType {
                name: plant.name.clone(),
                plant_type: plant.plant_type.clone(),
            }
        })?;

        // Negated comparisons also reject NaN.
        if !(plant.pmax >= 0.0 && plant.pmax.is_finite()) {
            return Err(invalid(plant, "pmax must be a finite value >= 0"));
        }

        let name = plant.name.clone();
        let (efficiency, pmin, pmax) = (plant.efficiency, plant.pmin, plant.pmax);
        match kind {
            PlantKind::WindTurbine => Ok(Self::WindTurbine { name, pmax }),
            PlantKind::GasFired => check_fueled_limits(plant).map(|()| Self::GasFired {
                name,
                efficiency,
                pmin,
                pmax,
            }),
            PlantKind::TurboJet => check_fueled_limits(plant).map(|()| Self::TurboJet {
                name,
                efficiency,
                pmin,
                pmax,
            }),
        }
    }
}

fn check_fueled_limits(plant: &PowerPlant) -> Result<(), AllocationError> {
    if !(plant.efficiency > 0.0 && plant.efficiency.is_finite()) {
        return Err(invalid(plant, "efficiency must be > 0"));
    }
    if !(plant.pmin <= plant.pmax) {
        return Err(invalid(plant, "pmin must be <= pmax"));
    }
    Ok(())
}

fn invalid(plant: &PowerPlant, reason: &str) -> AllocationError {
    AllocationError::InvalidPlantSpec {
        name: plant.name.clone(),
        reason: reason.to_string(),
    }
}
