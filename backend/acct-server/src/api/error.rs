//! REST API error types
//!
//! Every failure renders as
//! `{"status":"error","error":{"code":..,"message":..[,"field":..]}}`
//! with a matching HTTP status code.

use crate::api::{MSG_EMAIL_EXISTS, MSG_MISSING_BODY, MSG_MISSING_DATA};

use acct_auth::AuthError;
use acct_core::CoreError;
use acct_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub status: &'static str,
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "MISSING_FIELD")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name for missing or invalid fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body absent or not a JSON object of the expected shape (400)
    #[error("Malformed request: {message} {location}")]
    MalformedRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Required field missing or empty (400)
    #[error("Missing field: {message} {location}")]
    MissingField {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Field present but rejected by domain validation (400)
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Unique resource already exists (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Bad credentials or bad bearer token (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &str) -> Self {
        ApiError::MissingField {
            message: MSG_MISSING_DATA.to_string(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_exists() -> Self {
        ApiError::Conflict {
            message: MSG_EMAIL_EXISTS.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// A token that cannot be signed for a verified user is a server fault,
    /// whatever the underlying auth error says about the caller.
    #[track_caller]
    pub fn token_issuance(e: AuthError) -> Self {
        log::error!("Token issuance failed ({}): {}", e.error_code(), e);
        ApiError::internal("Token issuance failed")
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequest { .. }
            | ApiError::MissingField { .. }
            | ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location; client errors are expected traffic
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::MalformedRequest { message, .. } => ApiErrorBody {
                code: "MALFORMED_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::MissingField { message, field, .. } => ApiErrorBody {
                code: "MISSING_FIELD".into(),
                message,
                field,
            },
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message,
                field: None,
            },
        };

        (
            status,
            Json(ApiErrorResponse {
                status: "error",
                error: body,
            }),
        )
            .into_response()
    }
}

/// Any body the JSON extractor refuses is reported the same way
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        log::debug!("Rejected request body: {}", rejection.body_text());
        ApiError::MalformedRequest {
            message: MSG_MISSING_BODY.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Conflict { .. } => ApiError::email_exists(),
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::internal("Database operation failed")
            }
        }
    }
}

/// Convert auth errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if !e.is_client_error() {
            log::error!("Auth error: {}", e);
            return ApiError::internal("Authentication backend failure");
        }

        log::debug!("Bearer token rejected ({}): {}", e.error_code(), e);
        let message = match e {
            AuthError::MissingHeader { .. } => "Missing Authorization header",
            AuthError::InvalidScheme { .. } => "Authorization header must use the Bearer scheme",
            AuthError::TokenExpired { .. } => "Token has expired",
            _ => "Invalid token",
        };
        ApiError::unauthorized(message)
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { field, message, .. } => {
                ApiError::invalid_field(field, message)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
