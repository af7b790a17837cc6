//! SHA-256 and SHA-512 hash algorithm implementations

use crate::hashing::traits::PasswordAlgorithm;
use crate::Result;
use sha2::{Digest, Sha256, Sha512};

pub struct Sha256Algorithm;

impl PasswordAlgorithm for Sha256Algorithm {
    fn id(&self) -> &'static str {
        "sha256"
    }

    fn display_name(&self) -> &'static str {
        "SHA-256"
    }

    fn digest(&self, password: &str) -> Result<String> {
        Ok(format!("{:x}", Sha256::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        Ok(self.digest(password)?.eq_ignore_ascii_case(target))
    }
}

pub struct Sha512Algorithm;

impl PasswordAlgorithm for Sha512Algorithm {
    fn id(&self) -> &'static str {
        "sha512"
    }

    fn display_name(&self) -> &'static str {
        "SHA-512"
    }

    fn digest(&self, password: &str) -> Result<String> {
        Ok(format!("{:x}", Sha512::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        Ok(self.digest(password)?.eq_ignore_ascii_case(target))
    }
}
