//! Input validation error types

use thiserror::Error;

/// Validation errors for attack inputs
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Target hash value is empty after trimming
    #[error("Empty hash value: paste the target hash before launching an attack")]
    EmptyHashValue,

    /// Algorithm identifier is not in the supported set
    #[error("Unsupported algorithm '{name}'. Choose from: {supported}")]
    UnsupportedAlgorithm { name: String, supported: String },

    /// Invalid input parameter
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter { parameter: String, reason: String },
}

impl ValidationError {
    /// Create an unsupported algorithm error
    pub fn unsupported_algorithm(name: &str, supported: &[&str]) -> Self {
        Self::UnsupportedAlgorithm {
            name: name.to_string(),
            supported: supported.join(", "),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
        }
    }
}
