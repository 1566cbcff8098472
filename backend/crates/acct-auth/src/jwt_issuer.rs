use crate::{AuthError, Claims, JwtSettings, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs HS256 access tokens for a subject
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    header: Header,
    ttl_secs: i64,
}

impl JwtIssuer {
    pub fn new(settings: &JwtSettings) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(&settings.secret),
            header: Header::new(Algorithm::HS256),
            ttl_secs: i64::try_from(settings.ttl.as_secs()).unwrap_or(i64::MAX),
        }
    }

    /// Issue a token for `subject` valid from now until now + ttl
    #[track_caller]
    pub fn issue(&self, subject: &str) -> AuthErrorResult<String> {
        self.issue_at(subject, chrono::Utc::now().timestamp())
    }

    /// Issue a token with an explicit issued-at timestamp
    #[track_caller]
    pub fn issue_at(&self, subject: &str, issued_at: i64) -> AuthErrorResult<String> {
        let claims = Claims::new(subject, issued_at, self.ttl_secs);
        claims.validate()?;

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
