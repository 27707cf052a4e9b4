//! Application-level error type.
//!
//! Failures from validation, persistence, or token issuance propagate
//! unchanged to the caller; nothing is swallowed here.

use thiserror::Error;

use postboard_domain::{DomainError, RepositoryError, TokenError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Token(#[from] TokenError),
}
