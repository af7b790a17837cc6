//! bcrypt adaptive hash implementation
//!
//! Backed by the `bcrypt` crate behind the `bcrypt` cargo feature. When the
//! feature is compiled out the algorithm stays registered so the capability
//! probe can report exactly why it is unusable.

use crate::hashing::traits::{Availability, PasswordAlgorithm};
use crate::Result;

#[cfg(not(feature = "bcrypt"))]
use crate::error::BackendError;

const MISSING_REASON: &str =
    "bcrypt support requires the `bcrypt` cargo feature (enabled by default)";

pub struct BcryptAlgorithm;

impl PasswordAlgorithm for BcryptAlgorithm {
    fn id(&self) -> &'static str {
        "bcrypt"
    }

    fn display_name(&self) -> &'static str {
        "bcrypt"
    }

    #[cfg(feature = "bcrypt")]
    fn digest(&self, password: &str) -> Result<String> {
        use crate::error::BackendError;
        bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| BackendError::operation("bcrypt", e).into())
    }

    #[cfg(not(feature = "bcrypt"))]
    fn digest(&self, _password: &str) -> Result<String> {
        Err(BackendError::unavailable("bcrypt", MISSING_REASON).into())
    }

    #[cfg(feature = "bcrypt")]
    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        use crate::error::BackendError;
        // The backend does its own constant-work comparison; a malformed
        // encoded target is a backend error, not a mismatch.
        bcrypt::verify(password, target)
            .map_err(|e| BackendError::operation("bcrypt", e).into())
    }

    #[cfg(not(feature = "bcrypt"))]
    fn verify(&self, _password: &str, _target: &str) -> Result<bool> {
        Err(BackendError::unavailable("bcrypt", MISSING_REASON).into())
    }

    fn availability(&self) -> Availability {
        if cfg!(feature = "bcrypt") {
            Availability::ok()
        } else {
            Availability::missing(MISSING_REASON)
        }
    }
}
