use crate::ApiError;

use acct_auth::AuthError;
use acct_core::CoreError;
use acct_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_error_envelope() {
    let (status, json) = render(ApiError::unauthorized("Bad email or password")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["status"], "error");
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Bad email or password");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_missing_field_returns_400_with_field() {
    let (status, json) = render(ApiError::missing_field("password")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_FIELD");
    assert_eq!(json["error"]["message"], "Missing required data");
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_malformed_request_returns_400() {
    let error = ApiError::MalformedRequest {
        message: "Missing request body".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MALFORMED_REQUEST");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = render(ApiError::internal("Database operation failed")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_conflict_converts_to_email_exists() {
    let db_error = DbError::Conflict {
        field: "email",
        value: "a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Conflict { message, .. } => assert_eq!(message, "Email already exists"),
        other => panic!("expected Conflict, got {:?}", other),
    }
}

#[test]
fn test_other_db_errors_hide_details() {
    let db_error = DbError::Initialization {
        message: "disk /var/secret full".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = db_error.into();

    match api_error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("expected Internal, got {:?}", other),
    }
}

#[test]
fn test_token_errors_convert_to_unauthorized() {
    let cases = [
        AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::TokenExpired {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidToken {
            message: "empty bearer token".into(),
            location: ErrorLocation::from(Location::caller()),
        },
    ];

    for auth_error in cases {
        let api_error: ApiError = auth_error.into();
        assert_eq!(api_error.status_code(), StatusCode::UNAUTHORIZED);
    }
}

#[test]
fn test_hashing_failure_converts_to_internal() {
    let auth_error = AuthError::PasswordHash {
        message: "salt generation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = auth_error.into();

    assert_eq!(api_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_core_validation_converts_to_validation_error() {
    let core_error = CoreError::Validation {
        field: "email",
        message: "email is longer than 200 bytes".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let api_error: ApiError = core_error.into();

    assert_that!(api_error.status_code(), eq(StatusCode::BAD_REQUEST));
    match api_error {
        ApiError::Validation { field, message, .. } => {
            assert_that!(field.as_deref(), eq(Some("email")));
            assert_that!(message, contains_substring("200"));
        }
        other => panic!("expected Validation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = render(ApiError::invalid_field("email", "too long")).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"].as_str(), some(eq("email")));
}

#[tokio::test]
async fn test_rejected_subject_at_issuance_renders_500_not_401() {
    let auth_error = AuthError::InvalidClaim {
        claim: "sub".into(),
        message: "sub exceeds maximum length".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = render(ApiError::token_issuance(auth_error)).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(eq("Token issuance failed"))
    );
}
