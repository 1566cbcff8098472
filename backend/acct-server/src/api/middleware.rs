use crate::{ApiResult, AppState};

use acct_auth::{AuthenticatedUser, bearer_token};

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// Bearer guard for protected routes.
///
/// Validates `Authorization: Bearer <jwt>` and hands the handler an
/// [`AuthenticatedUser`] through request extensions. Any failure is a 401
/// and the inner handler never runs.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)?;
    let claims = state.jwt_validator.validate(token)?;
    let user = AuthenticatedUser::from_claims(claims)?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}
