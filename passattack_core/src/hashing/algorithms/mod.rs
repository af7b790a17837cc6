//! Built-in hash algorithm implementations

use super::registry::AlgorithmRegistry;

pub mod bcrypt;
pub mod md5;
pub mod pbkdf2;
pub mod sha1;
pub mod sha2;

/// Register all built-in algorithms with the registry
pub fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(md5::Md5Algorithm);
    registry.register(sha1::Sha1Algorithm);
    registry.register(sha2::Sha256Algorithm);
    registry.register(sha2::Sha512Algorithm);
    registry.register(bcrypt::BcryptAlgorithm);
    registry.register(pbkdf2::Pbkdf2Algorithm);
}
