//! Allocation failures.

use thiserror::Error;

/// Reasons an allocation request cannot be turned into a plan.
///
/// Every variant aborts the whole allocation; no partial plan is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    /// The plant's type tag is not one of the known kinds.
    #[error("unknown plant type \"{plant_type}\" for plant \"{name}\"")]
    UnknownPlantType { name: String, plant_type: String },

    /// The plant's operating limits cannot be dispatched.
    #[error("invalid plant \"{name}\": {reason}")]
    InvalidPlantSpec { name: String, reason: String },

    /// A request-level value is outside its domain.
    #[error("invalid request: `{field}` {reason}")]
    InvalidRequest { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_plant_name() {
        let err = AllocationError::UnknownPlantType {
            name: "sunny".to_string(),
            plant_type: "solar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown plant type \"solar\" for plant \"sunny\""
        );

        let err = AllocationError::InvalidPlantSpec {
            name: "gas1".to_string(),
            reason: "efficiency must be > 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid plant \"gas1\": efficiency must be > 0"
        );
    }

    #[test]
    fn request_message_names_the_field() {
        let err = AllocationError::InvalidRequest {
            field: "fuels.wind(%)",
            reason: "must be in [0, 100]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid request: `fuels.wind(%)` must be in [0, 100]"
        );
    }
}
