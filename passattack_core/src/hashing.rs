//! Hash verification for the password recovery engine
//!
//! Supports fast unsalted digests (MD5, SHA-1, SHA-256, SHA-512) and
//! deliberately slow adaptive hashes (bcrypt, PBKDF2-SHA256). Fast digests
//! compare as case-insensitive hex; adaptive hashes carry their own salt
//! and parameters inside the encoded target string.

use crate::error::ValidationError;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod algorithms;
mod registry;
mod traits;

pub use registry::AlgorithmRegistry;
pub use traits::{AlgorithmExt, Availability, PasswordAlgorithm};

/// Hash algorithms supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmId {
    /// MD5 hex digest
    Md5,
    /// SHA-1 hex digest
    Sha1,
    /// SHA-256 hex digest
    Sha256,
    /// SHA-512 hex digest
    Sha512,
    /// bcrypt encoded hash (salt and cost embedded)
    Bcrypt,
    /// PBKDF2-HMAC-SHA256 encoded hash
    Pbkdf2Sha256,
}

impl AlgorithmId {
    /// All supported algorithms, in canonical order
    pub const ALL: [AlgorithmId; 6] = [
        AlgorithmId::Md5,
        AlgorithmId::Sha1,
        AlgorithmId::Sha256,
        AlgorithmId::Sha512,
        AlgorithmId::Bcrypt,
        AlgorithmId::Pbkdf2Sha256,
    ];

    /// String identifiers accepted by `FromStr`, in canonical order
    pub fn supported_names() -> [&'static str; 6] {
        ["md5", "sha1", "sha256", "sha512", "bcrypt", "pbkdf2_sha256"]
    }

    /// Whether this algorithm is a slow, salted adaptive hash
    pub fn is_adaptive(&self) -> bool {
        matches!(self, AlgorithmId::Bcrypt | AlgorithmId::Pbkdf2Sha256)
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmId::Md5 => write!(f, "md5"),
            AlgorithmId::Sha1 => write!(f, "sha1"),
            AlgorithmId::Sha256 => write!(f, "sha256"),
            AlgorithmId::Sha512 => write!(f, "sha512"),
            AlgorithmId::Bcrypt => write!(f, "bcrypt"),
            AlgorithmId::Pbkdf2Sha256 => write!(f, "pbkdf2_sha256"),
        }
    }
}

impl std::str::FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(AlgorithmId::Md5),
            "sha1" => Ok(AlgorithmId::Sha1),
            "sha256" => Ok(AlgorithmId::Sha256),
            "sha512" => Ok(AlgorithmId::Sha512),
            "bcrypt" => Ok(AlgorithmId::Bcrypt),
            "pbkdf2_sha256" => Ok(AlgorithmId::Pbkdf2Sha256),
            _ => Err(Error::Validation(ValidationError::unsupported_algorithm(
                s,
                &AlgorithmId::supported_names(),
            ))),
        }
    }
}

impl AlgorithmExt for AlgorithmId {
    fn to_impl(&self) -> Arc<dyn PasswordAlgorithm> {
        AlgorithmRegistry::global()
            .get(&self.to_string())
            .expect("Algorithm should be registered")
    }
}

/// Target of an attack run: algorithm plus the digest to crack
///
/// The target string is trimmed of surrounding whitespace at construction
/// and never changes afterwards.
#[derive(Debug, Clone)]
pub struct HashSpec {
    algorithm: AlgorithmId,
    target: String,
}

impl HashSpec {
    /// Build a spec from an algorithm and a raw target string
    ///
    /// Fails with a validation error when the target is empty after
    /// trimming.
    pub fn new(algorithm: AlgorithmId, target: &str) -> Result<Self> {
        let trimmed = target.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation(ValidationError::EmptyHashValue));
        }
        Ok(Self {
            algorithm,
            target: trimmed.to_string(),
        })
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Stateless hash verification facade
///
/// Safe to share across any number of concurrent attack runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashVerifier;

impl HashVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Compute the canonical representation of `password` for `algorithm`
    ///
    /// Hex digest for fast hashes; library-encoded string (embedded salt
    /// and cost) for adaptive hashes.
    pub fn digest(&self, password: &str, algorithm: AlgorithmId) -> Result<String> {
        algorithm.to_impl().digest(password)
    }

    /// Re-derive and compare `password` against `target`
    ///
    /// Fast digests never fail on a malformed target; they simply return
    /// `false`. Adaptive backends may fail on malformed encoded targets or
    /// when the backend library is absent.
    pub fn verify(&self, password: &str, target: &str, algorithm: AlgorithmId) -> Result<bool> {
        algorithm.to_impl().verify(password, target.trim())
    }

    /// Pre-flight capability probe
    ///
    /// Callers should check this before launching a long-running attack
    /// with an adaptive algorithm whose backend may be compiled out.
    pub fn availability(&self, algorithm: AlgorithmId) -> Availability {
        algorithm.to_impl().availability()
    }
}
