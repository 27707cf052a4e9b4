//! Access-token issuance seam.

use thiserror::Error;

use crate::values::UserId;

/// Errors from the token service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token creation failed: {0}")]
    Creation(String),

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("token payload missing subject")]
    MissingSubject,
}

/// Capability to issue an access token keyed by a user identifier.
pub trait TokenIssuer {
    fn issue(&self, user_id: &UserId) -> Result<String, TokenError>;
}
