//! Password hashing and verification via Argon2.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash as ParsedHash, PasswordHasher as _, PasswordVerifier,
        SaltString,
    },
    Argon2,
};
use postboard_domain::{DomainError, PasswordHasher};

/// Argon2id hasher with OS-random salts, implementing the domain hashing seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgonHasher;

impl ArgonHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for ArgonHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Hashing(e.to_string()))
    }

    fn verify(&self, hash: &str, plain: &str) -> bool {
        let Ok(parsed) = ParsedHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }
}
