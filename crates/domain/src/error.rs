//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised while constructing domain objects.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value-object constraint was violated. The message names the
    /// constraint and is safe to surface to API clients.
    #[error("{0}")]
    Validation(String),

    /// The password hashing collaborator failed.
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

impl DomainError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_surfaced_verbatim() {
        let err = DomainError::validation("username is too short");
        assert_eq!(err.to_string(), "username is too short");
    }
}
