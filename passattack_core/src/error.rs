//! Error types for the password recovery engine
//!
//! Errors are organized into categories so callers can distinguish bad
//! input from missing files and missing optional hash backends. During a
//! running attack none of these are propagated to the caller; the
//! orchestrator captures them into `AttackResult.error` instead.

use thiserror::Error;

pub mod backend;
pub mod io;
pub mod validation;

pub use self::backend::BackendError;
pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the password recovery engine
///
/// - I/O errors: wordlist open and read failures
/// - Validation errors: empty hash values, bad parameters, unknown algorithms
/// - Backend errors: optional adaptive-hash libraries missing at runtime
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Adaptive-hash backend errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}
