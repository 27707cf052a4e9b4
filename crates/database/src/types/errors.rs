//! Error types for the database layer.

use thiserror::Error;

/// Failures while establishing or preparing the database.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection error: {0}")]
    ConnectionError(String),

    #[error("migration error: {0}")]
    MigrationError(String),
}
