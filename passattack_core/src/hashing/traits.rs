//! Core traits for the hash algorithm extensibility system

use crate::Result;
use std::sync::Arc;

/// Core trait that all hash algorithms must implement
pub trait PasswordAlgorithm: Send + Sync {
    /// Unique identifier for this algorithm
    fn id(&self) -> &'static str;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Compute the canonical representation of `password`
    fn digest(&self, password: &str) -> Result<String>;

    /// Re-derive and compare `password` against an encoded `target`
    ///
    /// `target` arrives already trimmed of surrounding whitespace.
    fn verify(&self, password: &str, target: &str) -> Result<bool>;

    /// Runtime capability probe for this algorithm's backend
    fn availability(&self) -> Availability {
        Availability::ok()
    }
}

/// Result of a backend capability probe
#[derive(Debug, Clone)]
pub struct Availability {
    pub available: bool,
    pub reason: String,
}

impl Availability {
    /// Backend present and usable
    pub fn ok() -> Self {
        Self {
            available: true,
            reason: "ok".to_string(),
        }
    }

    /// Backend absent, with an actionable reason
    pub fn missing(reason: &str) -> Self {
        Self {
            available: false,
            reason: reason.to_string(),
        }
    }
}

/// Extension trait mapping algorithm identifiers to implementations
pub trait AlgorithmExt {
    /// Look up the registered implementation
    fn to_impl(&self) -> Arc<dyn PasswordAlgorithm>;
}
