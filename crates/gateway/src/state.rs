//! Shared application state for the gateway

use std::sync::Arc;

use sqlx::SqlitePool;

use postboard_app::RegistrationHandler;
use postboard_auth::{ArgonHasher, JwtTokenService};
use postboard_database::SqlUserRepository;

/// Concrete handler wiring used by the HTTP layer.
pub type RegistrationService = RegistrationHandler<SqlUserRepository, ArgonHasher, JwtTokenService>;

/// Shared application state, constructed once at startup and cloned cheaply
/// per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
    /// Registration use cases
    pub registration: Arc<RegistrationService>,
    /// Read access for the posts listing
    pub repository: SqlUserRepository,
    /// Token validation for the bearer middleware
    pub tokens: JwtTokenService,
}

impl AppState {
    pub fn new(pool: SqlitePool, hasher: ArgonHasher, tokens: JwtTokenService) -> Self {
        let repository = SqlUserRepository::new(pool.clone());
        let registration = Arc::new(RegistrationHandler::new(
            repository.clone(),
            hasher,
            tokens.clone(),
        ));

        Self {
            pool,
            registration,
            repository,
            tokens,
        }
    }
}
