use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Config error: {0}")]
    Config(#[from] acct_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] acct_db::DbError),

    #[error("Hashing error: {0}")]
    Auth(#[from] acct_auth::AuthError),

    #[error("Invalid seed data: {0}")]
    Core(#[from] acct_core::CoreError),

    #[error("Schema missing: {message} {location}")]
    SchemaMissing {
        message: String,
        location: ErrorLocation,
    },
}

impl AdminError {
    #[track_caller]
    pub fn schema_missing<S: Into<String>>(message: S) -> Self {
        AdminError::SchemaMissing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdminError>;
