//! SHA-1 hash algorithm implementation

use crate::hashing::traits::PasswordAlgorithm;
use crate::Result;
use sha1::{Digest, Sha1};

pub struct Sha1Algorithm;

impl PasswordAlgorithm for Sha1Algorithm {
    fn id(&self) -> &'static str {
        "sha1"
    }

    fn display_name(&self) -> &'static str {
        "SHA-1"
    }

    fn digest(&self, password: &str) -> Result<String> {
        Ok(format!("{:x}", Sha1::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        Ok(self.digest(password)?.eq_ignore_ascii_case(target))
    }
}
