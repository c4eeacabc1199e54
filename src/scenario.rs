//! Built-in allocation requests and JSON request files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::dispatch::types::AllocationRequest;
use crate::plants::{FuelPrices, PowerPlant};

/// Available preset names.
pub const PRESETS: &[&str] = &["payload1", "payload2", "payload3"];

/// Preset used when no request source is given.
pub const DEFAULT_PRESET: &str = "payload1";

/// Failure to obtain a request from a preset name or a file.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid request JSON in \"{}\": {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown preset \"{name}\", available: {}", PRESETS.join(", "))]
    UnknownPreset { name: String },
}

/// Reference fleet shared by the presets: two large gas plants, a smaller
/// gas plant, a turbojet and two wind parks.
pub fn reference_fleet() -> Vec<PowerPlant> {
    vec![
        PowerPlant::new("gasfiredbig1", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredbig2", "gasfired", 0.53, 100.0, 460.0),
        PowerPlant::new("gasfiredsomewhatsmaller", "gasfired", 0.37, 40.0, 210.0),
        PowerPlant::new("tj1", "turbojet", 0.3, 0.0, 16.0),
        PowerPlant::new("windpark1", "windturbine", 1.0, 0.0, 150.0),
        PowerPlant::new("windpark2", "windturbine", 1.0, 0.0, 36.0),
    ]
}

/// 480 MW with 60% wind: wind and one large gas plant cover the load.
pub fn payload1() -> AllocationRequest {
    AllocationRequest::new(
        480.0,
        FuelPrices::new(13.4, 50.8, 20.0, 60.0),
        reference_fleet(),
    )
}

/// 480 MW without wind: the remainder after one large gas plant is too
/// small for the other gas plants and falls to the turbojet.
pub fn payload2() -> AllocationRequest {
    AllocationRequest::new(
        480.0,
        FuelPrices::new(13.4, 50.8, 20.0, 0.0),
        reference_fleet(),
    )
}

/// 910 MW with 60% wind: both large gas plants are needed.
pub fn payload3() -> AllocationRequest {
    AllocationRequest::new(
        910.0,
        FuelPrices::new(13.4, 50.8, 20.0, 60.0),
        reference_fleet(),
    )
}

/// Loads a request from a named preset.
///
/// # Errors
///
/// Returns `UnknownPreset` if the name is not in [`PRESETS`].
pub fn from_preset(name: &str) -> Result<AllocationRequest, ScenarioError> {
    match name {
        "payload1" => Ok(payload1()),
        "payload2" => Ok(payload2()),
        "payload3" => Ok(payload3()),
        _ => Err(ScenarioError::UnknownPreset {
            name: name.to_string(),
        }),
    }
}

/// Parses a request from a JSON file in the wire format.
///
/// # Errors
///
/// Returns a `ScenarioError` if the file cannot be read or the JSON does not
/// match the request shape.
pub fn from_json_file(path: &Path) -> Result<AllocationRequest, ScenarioError> {
    let content = fs::read_to_string(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ScenarioError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::production_plan;

    #[test]
    fn all_presets_load_and_validate() {
        for name in PRESETS {
            let request = from_preset(name).expect("preset should load");
            assert!(request.validate().is_ok(), "preset \"{name}\" should be valid");
            assert_eq!(request.plants.len(), 6);
        }
    }

    #[test]
    fn unknown_preset_lists_available() {
        let err = from_preset("nonexistent").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown preset"));
        assert!(message.contains("payload1, payload2, payload3"));
    }

    #[test]
    fn default_preset_exists() {
        assert!(PRESETS.contains(&DEFAULT_PRESET));
    }

    #[test]
    fn payload1_plan() {
        let plan = production_plan(&payload1()).expect("payload1 should plan");
        let entries: Vec<(&str, f64)> = plan.iter().map(|e| (e.name.as_str(), e.p)).collect();
        assert_eq!(
            entries,
            [("windpark1", 90.0), ("windpark2", 21.6), ("gasfiredbig1", 368.4)]
        );
    }

    #[test]
    fn payload2_plan_falls_back_to_turbojet() {
        let plan = production_plan(&payload2()).expect("payload2 should plan");
        let entries: Vec<(&str, f64)> = plan.iter().map(|e| (e.name.as_str(), e.p)).collect();
        assert_eq!(
            entries,
            [
                ("windpark1", 0.0),
                ("windpark2", 0.0),
                ("gasfiredbig1", 460.0),
                ("gasfiredbig2", 0.0),
                ("gasfiredsomewhatsmaller", 0.0),
                ("tj1", 16.0),
            ]
        );
    }

    #[test]
    fn payload3_plan() {
        let plan = production_plan(&payload3()).expect("payload3 should plan");
        let entries: Vec<(&str, f64)> = plan.iter().map(|e| (e.name.as_str(), e.p)).collect();
        assert_eq!(
            entries,
            [
                ("windpark1", 90.0),
                ("windpark2", 21.6),
                ("gasfiredbig1", 460.0),
                ("gasfiredbig2", 338.4),
            ]
        );
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = from_json_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ScenarioError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
