//! Service bootstrap: tracing setup and one-time construction of the shared
//! backend services.

use anyhow::Result;
use sqlx::SqlitePool;
use tracing::info;

use postboard_auth::{ArgonHasher, JwtTokenService};
use postboard_config::AppConfig;
use postboard_database::initialize_database;

pub mod telemetry {
    use anyhow::Result;
    use tracing::Level;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    pub fn init_tracing() -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = SubscriberBuilder::default()
            .with_max_level(Level::INFO)
            .with_env_filter(env_filter)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}

/// Shared services, constructed exactly once at startup and safe for
/// concurrent read-only use afterwards.
#[derive(Clone)]
pub struct BackendServices {
    pub db_pool: SqlitePool,
    pub hasher: ArgonHasher,
    pub tokens: JwtTokenService,
}

impl BackendServices {
    pub async fn initialise(config: &AppConfig) -> Result<Self> {
        let db_pool = initialize_database(&config.database).await?;
        let hasher = ArgonHasher::new();
        let tokens = JwtTokenService::new(&config.auth);

        info!("backend services initialised");

        Ok(Self {
            db_pool,
            hasher,
            tokens,
        })
    }
}

pub async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(?error, "failed to listen for shutdown signal");
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn initialise_builds_all_services() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("runtime.db");

        let mut config = AppConfig::default();
        config.database.url = format!("sqlite://{}", db_path.display());
        config.database.max_connections = 1;

        let services = BackendServices::initialise(&config).await.unwrap();
        sqlx::query("SELECT 1")
            .fetch_one(&services.db_pool)
            .await
            .unwrap();
    }
}
