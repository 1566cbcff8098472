//! Registration and login handlers

use crate::api::{MSG_BAD_CREDENTIALS, MSG_USER_CREATED};
use crate::{
    ApiError, ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, StatusResponse,
};

use acct_core::NewUser;

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use log::{info, warn};

// =============================================================================
// Handlers
// =============================================================================

/// POST /register
///
/// Checks run in a fixed order: body shape (400), existing email (409),
/// required fields (400), email length (400). The unique constraint still decides races that
/// slip past the existence check.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<StatusResponse>)> {
    let Json(request) = payload?;

    if let Some(email) = request.email.as_deref().filter(|e| !e.is_empty())
        && state.users.find_by_email(email).await?.is_some()
    {
        return Err(ApiError::email_exists());
    }

    let email = required(request.email, "email")?;
    let password = required(request.password, "password")?;
    NewUser::validate_email(&email)?;

    let hasher = Arc::clone(&state.hasher);
    let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Password hashing task failed: {}", e)))??;

    let new_user = NewUser::new(email, password_hash)?.with_names(
        request.firstname.unwrap_or_default(),
        request.lastname.unwrap_or_default(),
    );
    let user = state.users.create(&new_user).await?;

    info!("Registered user {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(StatusResponse::success_with(MSG_USER_CREATED)),
    ))
}

/// POST /login
///
/// Unknown email, wrong password and missing fields all produce the same
/// 401. An unknown email still pays for one hash verification.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let user = if email.is_empty() {
        None
    } else {
        state.users.find_by_email(&email).await?
    };

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let hasher = Arc::clone(&state.hasher);
    let verified = tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => hasher.verify(&password, &hash),
        None => {
            let _ = hasher.verify(&password, hasher.dummy_hash());
            false
        }
    })
    .await
    .map_err(|e| ApiError::internal(format!("Password verification task failed: {}", e)))?;

    let Some(user) = user.filter(|_| verified) else {
        warn!("Failed login attempt");
        return Err(ApiError::unauthorized(MSG_BAD_CREDENTIALS));
    };

    let access_token = state
        .jwt_issuer
        .issue(&user.email)
        .map_err(ApiError::token_issuance)?;
    info!("User {} logged in", user.id);

    Ok(Json(LoginResponse {
        status: "success",
        access_token,
    }))
}

// =============================================================================
// Helpers
// =============================================================================

#[track_caller]
fn required(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::missing_field(field)),
    }
}
