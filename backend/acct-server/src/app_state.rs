use crate::error::Result as ServerErrorResult;

use acct_auth::{CredentialHasher, JwtIssuer, JwtSettings, JwtValidator};
use acct_config::Config;
use acct_db::UserRepository;

use std::sync::Arc;

use log::info;
use sqlx::SqlitePool;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub users: UserRepository,
    pub hasher: Arc<CredentialHasher>,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
}

impl AppState {
    pub fn new(pool: SqlitePool, hasher: CredentialHasher, jwt: &JwtSettings) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            pool,
            hasher: Arc::new(hasher),
            jwt_issuer: Arc::new(JwtIssuer::new(jwt)),
            jwt_validator: Arc::new(JwtValidator::new(jwt)),
        }
    }

    /// Open the database, apply migrations, and build the auth components.
    /// Expects a validated config.
    pub async fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let database_path = config.database_path()?;
        info!("Connecting to database: {}", database_path.display());

        let pool = acct_db::connect(&database_path, config.database.max_connections).await?;
        info!("Database connection established");

        acct_db::migrate(&pool).await?;

        let hasher = CredentialHasher::with_params(
            config.auth.hash_memory_kib,
            config.auth.hash_iterations,
            config.auth.hash_parallelism,
        )?;

        let jwt = JwtSettings::new(config.auth.secret_bytes(), config.auth.token_ttl())
            .with_leeway(config.auth.leeway_secs);
        info!("JWT: HS256 issuer and validator ready");

        Ok(Self::new(pool, hasher, &jwt))
    }
}
