use crate::StatusResponse;

use acct_auth::AuthenticatedUser;

use axum::{Extension, Json};
use log::debug;

/// GET /
pub async fn root() -> &'static str {
    "Hello world"
}

/// GET /protected
///
/// Runs only after the bearer guard accepted the token
pub async fn protected(Extension(user): Extension<AuthenticatedUser>) -> Json<StatusResponse> {
    debug!(
        "Protected resource accessed by {} (token expires {})",
        user.email, user.expires_at
    );

    Json(StatusResponse::success())
}
