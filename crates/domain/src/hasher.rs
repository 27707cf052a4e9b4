//! Password hashing seam.

use crate::error::DomainError;

/// Capability to hash and verify passwords. Implemented by the Argon2 adapter
/// in the auth crate; test code substitutes cheap fakes.
pub trait PasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Returns false on mismatch; never errors.
    fn verify(&self, hash: &str, plain: &str) -> bool;
}
