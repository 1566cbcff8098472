#![allow(dead_code)]

//! Test infrastructure for acct-server API tests

use acct_auth::{CredentialHasher, JwtIssuer, JwtSettings};
use acct_core::NewUser;
use acct_server::AppState;

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response, header},
};
use http_body_util::BodyExt;

pub const TEST_SECRET: &[u8] = b"integration-test-secret-with-at-least-32-bytes";
pub const TEST_TTL: Duration = Duration::from_secs(900);

pub fn test_jwt_settings() -> JwtSettings {
    JwtSettings::new(TEST_SECRET, TEST_TTL)
}

/// In-memory database with migrations and a cheap hasher
pub async fn create_test_app_state() -> AppState {
    let pool = acct_db::connect_in_memory()
        .await
        .expect("Failed to create test database");
    let hasher = CredentialHasher::with_params(8, 1, 1).expect("Failed to build hasher");

    AppState::new(pool, hasher, &test_jwt_settings())
}

/// Insert a user directly through the store
pub async fn create_test_user(state: &AppState, email: &str, password: &str) {
    let hash = state.hasher.hash(password).expect("Failed to hash password");
    let new_user = NewUser::new(email, hash)
        .expect("Invalid test user")
        .with_names("Test", "User");
    state
        .users
        .create(&new_user)
        .await
        .expect("Failed to create test user");
}

pub fn issuer() -> JwtIssuer {
    JwtIssuer::new(&test_jwt_settings())
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}
