//! Merit-order production planning for a fleet of power plants.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
/// Cost model, merit-order scheduler, and plan types.
pub mod dispatch;
pub mod io;
pub mod plants;
pub mod scenario;
pub mod telemetry;
