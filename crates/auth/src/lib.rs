//! # Postboard Auth Crate
//!
//! Concrete security services behind the domain seams: Argon2 password
//! hashing and HS256 JWT issuance/validation.

pub mod password;
pub mod token;

pub use password::ArgonHasher;
pub use token::{Claims, JwtTokenService};
