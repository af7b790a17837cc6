//! PBKDF2-HMAC-SHA256 adaptive hash implementation
//!
//! Two encodings are supported. With the `pbkdf2-phc` feature (default) new
//! digests use the PHC string format produced by the `pbkdf2` crate's
//! password-hash API. The plain `pbkdf2:<base64 salt>:<base64 key>` fallback
//! encoding, with a fixed iteration count, is always accepted on verify and
//! becomes the producing format when the feature is compiled out. This
//! algorithm is therefore usable regardless of feature selection.

use crate::error::BackendError;
use crate::hashing::traits::PasswordAlgorithm;
use crate::Result;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha256;

/// Iteration count for the fallback encoding
const FALLBACK_ITERATIONS: u32 = 260_000;
const FALLBACK_PREFIX: &str = "pbkdf2:";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

pub struct Pbkdf2Algorithm;

impl PasswordAlgorithm for Pbkdf2Algorithm {
    fn id(&self) -> &'static str {
        "pbkdf2_sha256"
    }

    fn display_name(&self) -> &'static str {
        "PBKDF2-SHA256"
    }

    fn digest(&self, password: &str) -> Result<String> {
        #[cfg(feature = "pbkdf2-phc")]
        {
            phc_digest(password)
        }
        #[cfg(not(feature = "pbkdf2-phc"))]
        {
            Ok(fallback_digest(password))
        }
    }

    fn verify(&self, password: &str, target: &str) -> Result<bool> {
        if target.starts_with(FALLBACK_PREFIX) {
            return verify_fallback(password, target);
        }

        #[cfg(feature = "pbkdf2-phc")]
        if target.starts_with("$pbkdf2") {
            return phc_verify(password, target);
        }

        // Unrecognized encoding: not a match, not an error
        Ok(false)
    }
}

/// Produce the `pbkdf2:<salt>:<key>` fallback encoding
#[cfg(any(not(feature = "pbkdf2-phc"), test))]
fn fallback_digest(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt[..]);

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, FALLBACK_ITERATIONS, &mut key);

    format!(
        "{}{}:{}",
        FALLBACK_PREFIX,
        BASE64.encode(salt),
        BASE64.encode(key)
    )
}

fn verify_fallback(password: &str, target: &str) -> Result<bool> {
    let rest = &target[FALLBACK_PREFIX.len()..];
    let (b64_salt, b64_key) = rest
        .split_once(':')
        .ok_or_else(|| malformed("expected pbkdf2:<salt>:<key>"))?;

    let salt = BASE64
        .decode(b64_salt)
        .map_err(|_| malformed("salt is not valid base64"))?;
    let stored_key = BASE64
        .decode(b64_key)
        .map_err(|_| malformed("derived key is not valid base64"))?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), &salt, FALLBACK_ITERATIONS, &mut key);

    Ok(derived_keys_equal(&key, &stored_key))
}

fn malformed(detail: &str) -> crate::Error {
    BackendError::operation("pbkdf2_sha256", format!("malformed hash encoding: {detail}")).into()
}

/// Compare derived keys without early exit on the first differing byte
fn derived_keys_equal(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(feature = "pbkdf2-phc")]
fn phc_digest(password: &str) -> Result<String> {
    use pbkdf2::password_hash::{PasswordHasher, SaltString};
    use pbkdf2::Pbkdf2;

    let mut salt_bytes = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt_bytes[..]);
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| BackendError::operation("pbkdf2_sha256", e))?;

    let hash = Pbkdf2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| BackendError::operation("pbkdf2_sha256", e))?;
    Ok(hash.to_string())
}

#[cfg(feature = "pbkdf2-phc")]
fn phc_verify(password: &str, target: &str) -> Result<bool> {
    use pbkdf2::password_hash::{PasswordHash, PasswordVerifier};
    use pbkdf2::Pbkdf2;

    let parsed =
        PasswordHash::new(target).map_err(|e| BackendError::operation("pbkdf2_sha256", e))?;
    Ok(Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_round_trip() {
        let encoded = fallback_digest("tr0ub4dor&3");
        assert!(encoded.starts_with("pbkdf2:"));
        assert!(verify_fallback("tr0ub4dor&3", &encoded).unwrap());
        assert!(!verify_fallback("correct horse", &encoded).unwrap());
    }

    #[test]
    fn test_fallback_malformed_encodings_are_errors() {
        assert!(verify_fallback("pw", "pbkdf2:only-one-part").is_err());
        assert!(verify_fallback("pw", "pbkdf2:!!bad!!:AAAA").is_err());
    }

    #[test]
    fn test_unrecognized_encoding_is_false() {
        let algo = Pbkdf2Algorithm;
        assert!(!algo.verify("pw", "something-else-entirely").unwrap());
    }

    #[test]
    fn test_stored_key_of_wrong_length_is_false() {
        let salt = BASE64.encode([0u8; SALT_LEN]);
        let short_key = BASE64.encode([0u8; 8]);
        let target = format!("pbkdf2:{salt}:{short_key}");
        assert!(!verify_fallback("pw", &target).unwrap());
    }

    #[cfg(feature = "pbkdf2-phc")]
    #[test]
    fn test_phc_round_trip() {
        let algo = Pbkdf2Algorithm;
        let encoded = algo.digest("s3cret").unwrap();
        assert!(encoded.starts_with("$pbkdf2-sha256$"));
        assert!(algo.verify("s3cret", &encoded).unwrap());
        assert!(!algo.verify("s3cret!", &encoded).unwrap());
    }
}
