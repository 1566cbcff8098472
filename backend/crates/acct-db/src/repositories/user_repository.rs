use crate::{DbError, Result as DbErrorResult};

use acct_core::{NewUser, User};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    firstname: Option<String>,
    lastname: Option<String>,
    email: String,
    password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            password_hash: row.password,
        }
    }
}

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Exact, case-sensitive lookup.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, firstname, lastname, email, password
                FROM users
                WHERE email = ?
                "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    /// Insert a user. The `UNIQUE (email)` constraint is the authority on
    /// duplicates: a violation surfaces as [`DbError::Conflict`] even when
    /// a concurrent insert slipped past the caller's own lookup.
    pub async fn create(&self, user: &NewUser) -> DbErrorResult<User> {
        let result = sqlx::query(
            r#"
              INSERT INTO users (firstname, lastname, email, password)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(&user.firstname)
        .bind(&user.lastname)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                DbError::Conflict {
                    field: "email",
                    value: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            other => DbError::from(other),
        })?;

        Ok(User {
            id: result.last_insert_rowid(),
            firstname: Some(user.firstname.clone()),
            lastname: Some(user.lastname.clone()),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
        })
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
