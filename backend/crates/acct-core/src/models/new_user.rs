use crate::{CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Longest email the users table declares, and the longest token subject
pub const MAX_EMAIL_LENGTH: usize = 200;

/// Insert payload for a user row. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Build a new user with empty name parts.
    #[track_caller]
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> CoreResult<Self> {
        let email = email.into();
        let password_hash = password_hash.into();

        Self::validate_email(&email)?;
        if password_hash.is_empty() {
            return Err(CoreError::Validation {
                field: "password",
                message: "password hash cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            firstname: String::new(),
            lastname: String::new(),
            email,
            password_hash,
        })
    }

    /// Length is counted in bytes, matching the token subject check.
    #[track_caller]
    pub fn validate_email(email: &str) -> CoreResult<()> {
        if email.is_empty() {
            return Err(CoreError::Validation {
                field: "email",
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(CoreError::Validation {
                field: "email",
                message: format!("email is longer than {} bytes", MAX_EMAIL_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    pub fn with_names(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.firstname = firstname.into();
        self.lastname = lastname.into();
        self
    }
}
