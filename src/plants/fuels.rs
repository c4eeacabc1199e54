use serde::{Deserialize, Serialize};

/// Tons of CO2 emitted per MWh produced by a gas-fired plant.
pub const GAS_CO2_TONS_PER_MWH: f64 = 0.3;

/// Fuel prices and wind availability for a single allocation request.
///
/// Wire field names carry their units (`"gas(euro/MWh)"`, `"wind(%)"`, ...).
///
/// # Examples
///
/// ```
/// use production_plan::plants::FuelPrices;
///
/// let fuels = FuelPrices::new(13.4, 50.8, 20.0, 60.0);
/// assert_eq!(fuels.wind_fraction(), 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelPrices {
    /// Gas price (euro/MWh).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    /// Kerosine price (euro/MWh).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    /// CO2 emission allowance price (euro/ton).
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    /// Wind availability in percent (0 to 100).
    #[serde(rename = "wind(%)")]
    pub wind: f64,
}

impl FuelPrices {
    /// Creates a fuel snapshot.
    ///
    /// # Arguments
    ///
    /// * `gas` - Gas price (euro/MWh)
    /// * `kerosine` - Kerosine price (euro/MWh)
    /// * `co2` - CO2 price (euro/ton)
    /// * `wind` - Wind availability in percent
    pub fn new(gas: f64, kerosine: f64, co2: f64, wind: f64) -> Self {
        Self {
            gas,
            kerosine,
            co2,
            wind,
        }
    }

    /// Fraction of nameplate capacity a wind turbine delivers.
    pub fn wind_fraction(&self) -> f64 {
        self.wind / 100.0
    }
}
