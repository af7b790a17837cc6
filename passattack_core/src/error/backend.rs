//! Adaptive-hash backend error types

use thiserror::Error;

/// Errors for optional hash backends that may be absent at runtime
#[derive(Error, Debug)]
pub enum BackendError {
    /// Required backend library is not compiled in
    #[error("Backend for '{algorithm}' unavailable: {reason}")]
    Unavailable { algorithm: String, reason: String },

    /// Backend rejected the operation (malformed encoded hash, cost out of range)
    #[error("Backend error for '{algorithm}': {message}")]
    Operation { algorithm: String, message: String },
}

impl BackendError {
    /// Create an unavailable backend error
    pub fn unavailable(algorithm: &str, reason: &str) -> Self {
        Self::Unavailable {
            algorithm: algorithm.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a backend operation error
    pub fn operation(algorithm: &str, message: impl std::fmt::Display) -> Self {
        Self::Operation {
            algorithm: algorithm.to_string(),
            message: message.to_string(),
        }
    }
}
