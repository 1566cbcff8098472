use crate::{AdminError, Result};

use acct_auth::CredentialHasher;
use acct_core::{NewUser, User};
use acct_db::UserRepository;

use log::info;
use sqlx::SqlitePool;

pub const SEED_FIRSTNAME: &str = "Shoaib";
pub const SEED_LASTNAME: &str = "Ahmad";
pub const SEED_EMAIL: &str = "shoaib@example.com";
pub const SEED_PASSWORD: &str = "P@ssw0rd";

/// Create the schema. Safe to run repeatedly.
pub async fn db_create(pool: &SqlitePool) -> Result<()> {
    acct_db::migrate(pool).await?;
    Ok(())
}

/// Drop every table.
pub async fn db_drop(pool: &SqlitePool) -> Result<()> {
    acct_db::drop_all(pool).await?;
    Ok(())
}

/// Insert the fixed test account. Fails on a second run because the email
/// is already taken.
pub async fn db_seed(pool: &SqlitePool, hasher: &CredentialHasher) -> Result<User> {
    let table: Option<(String,)> =
        sqlx::query_as("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'users'")
            .fetch_optional(pool)
            .await
            .map_err(acct_db::DbError::from)?;
    if table.is_none() {
        return Err(AdminError::schema_missing(
            "users table not found, run db-create first",
        ));
    }

    let password_hash = hasher.hash(SEED_PASSWORD)?;
    let new_user =
        NewUser::new(SEED_EMAIL, password_hash)?.with_names(SEED_FIRSTNAME, SEED_LASTNAME);

    let user = UserRepository::new(pool.clone()).create(&new_user).await?;
    info!(
        "Seeded user {} ({})",
        user.id,
        user.display_name().unwrap_or_else(|| user.email.clone())
    );

    Ok(user)
}
