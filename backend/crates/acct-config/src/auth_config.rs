use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB,
    DEFAULT_HASH_PARALLELISM, DEFAULT_LEEWAY_SECS, DEFAULT_TOKEN_TTL_SECS, MAX_LEEWAY_SECS,
    MAX_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_TOKEN_TTL_SECS,
};

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC secret for HS256 tokens
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: u64,
    /// Clock skew tolerated when checking `exp`
    pub leeway_secs: u64,
    pub hash_memory_kib: u32,
    pub hash_iterations: u32,
    pub hash_parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            leeway_secs: DEFAULT_LEEWAY_SECS,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("leeway_secs", &self.leeway_secs)
            .field("hash_memory_kib", &self.hash_memory_kib)
            .field("hash_iterations", &self.hash_iterations)
            .field("hash_parallelism", &self.hash_parallelism)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let secret = self.jwt_secret.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.jwt_secret is required (set ACCT_AUTH_JWT_SECRET)")
        })?;

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_LENGTH,
                secret.len()
            )));
        }

        if !(MIN_TOKEN_TTL_SECS..=MAX_TOKEN_TTL_SECS).contains(&self.token_ttl_secs) {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_secs must be {}-{}, got {}",
                MIN_TOKEN_TTL_SECS, MAX_TOKEN_TTL_SECS, self.token_ttl_secs
            )));
        }

        if self.leeway_secs > MAX_LEEWAY_SECS {
            return Err(ConfigError::auth(format!(
                "auth.leeway_secs must be <= {}, got {}",
                MAX_LEEWAY_SECS, self.leeway_secs
            )));
        }

        self.validate_hashing()
    }

    /// Argon2 cost parameters only. The admin CLI hashes without a JWT secret.
    pub fn validate_hashing(&self) -> ConfigErrorResult<()> {
        if self.hash_iterations == 0 || self.hash_parallelism == 0 {
            return Err(ConfigError::auth(
                "auth.hash_iterations and auth.hash_parallelism must be >= 1",
            ));
        }

        // Argon2 needs at least 8 KiB per lane
        let min_memory_kib = self.hash_parallelism.saturating_mul(8);
        if self.hash_memory_kib < min_memory_kib {
            return Err(ConfigError::auth(format!(
                "auth.hash_memory_kib must be >= 8 * hash_parallelism ({}), got {}",
                min_memory_kib, self.hash_memory_kib
            )));
        }

        Ok(())
    }

    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Secret bytes, empty when unset. Only meaningful after `validate()`.
    pub fn secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_deref().map(str::as_bytes).unwrap_or_default()
    }
}
