pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::new_user::{MAX_EMAIL_LENGTH, NewUser};
pub use models::user::User;

#[cfg(test)]
mod tests;
