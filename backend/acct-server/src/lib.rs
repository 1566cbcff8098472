pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    accounts::{
        accounts::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    middleware::require_bearer,
    protected::protected::{protected, root},
    status_response::StatusResponse,
};
pub use app_state::AppState;

pub use crate::routes::build_router;
