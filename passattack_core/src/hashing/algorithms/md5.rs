//! MD5 hash algorithm implementation

use crate::hashing::traits::PasswordAlgorithm;
use crate::Result;
use md5::{Digest, Md5};

pub struct Md5Algorithm;

impl PasswordAlgorithm for Md5Algorithm {
    fn id(&self) -> &'static str {
        "md5"
    }

    fn display_name(&self) -> &'static str {
        "MD5"
    }

    fn digest(&self, password: &str) -> Result<String> {
        Ok(format!("{:x}", Md5::digest(password.as_bytes())))
    }

    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        // A malformed target is simply not a match
        Ok(self.digest(password)?.eq_ignore_ascii_case(target))
    }
}
