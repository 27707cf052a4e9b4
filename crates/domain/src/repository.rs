//! Persistence seam for the aggregates.

use async_trait::async_trait;
use thiserror::Error;

use crate::aggregates::{Post, Profile, User};

/// Errors surfaced by the storage collaborator. Failures are logged by the
/// implementation and re-raised unchanged.
#[derive(Debug, Error, Clone)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),
}

/// Asynchronous persistence operations for the three aggregates.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn add_user(&self, user: &User) -> Result<(), RepositoryError>;

    async fn add_profile(&self, profile: &Profile) -> Result<(), RepositoryError>;

    async fn add_post(&self, post: &Post) -> Result<(), RepositoryError>;
}
