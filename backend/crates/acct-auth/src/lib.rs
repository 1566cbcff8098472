pub mod authenticated_user;
pub mod bearer_token;
pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod jwt_issuer;
pub mod jwt_settings;
pub mod jwt_validator;

pub use authenticated_user::AuthenticatedUser;
pub use bearer_token::bearer_token;
pub use claims::Claims;
pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
pub use jwt_issuer::JwtIssuer;
pub use jwt_settings::JwtSettings;
pub use jwt_validator::JwtValidator;

#[cfg(test)]
mod tests;
