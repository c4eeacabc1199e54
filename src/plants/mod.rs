//! Power plant records and the closed set of plant kinds they classify into.

/// Fuel price and wind availability snapshot.
pub mod fuels;
pub mod types;

// Re-export the main types for convenience
pub use fuels::FuelPrices;
pub use types::{PlantKind, PlantSpec, PowerPlant};
