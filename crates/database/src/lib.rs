//! # Postboard Database Crate
//!
//! SQLite persistence for the Postboard backend: connection management,
//! embedded migrations, and the repository implementing the domain
//! persistence seam.

use sqlx::SqlitePool;

use postboard_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;

pub use connection::prepare_database;
pub use entities::PostRow;
pub use migrations::run_migrations;
pub use repos::SqlUserRepository;
pub use types::{DatabaseError, DatabaseResult};

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;

    Ok(pool)
}
