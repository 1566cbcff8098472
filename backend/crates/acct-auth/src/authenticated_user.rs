use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Identity established by a verified bearer token.
/// Handlers behind the bearer guard receive this as a request extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthenticatedUser {
    #[track_caller]
    pub fn from_claims(claims: Claims) -> AuthErrorResult<Self> {
        let issued_at =
            DateTime::from_timestamp(claims.iat, 0).ok_or_else(|| AuthError::InvalidClaim {
                claim: "iat".to_string(),
                message: "timestamp out of range".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let expires_at =
            DateTime::from_timestamp(claims.exp, 0).ok_or_else(|| AuthError::InvalidClaim {
                claim: "exp".to_string(),
                message: "timestamp out of range".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            email: claims.sub,
            issued_at,
            expires_at,
        })
    }
}
