pub mod accounts;
pub mod error;
pub mod middleware;
pub mod protected;
pub mod status_response;

pub(crate) const MSG_MISSING_BODY: &str = "Missing request body";
pub(crate) const MSG_MISSING_DATA: &str = "Missing required data";
pub(crate) const MSG_EMAIL_EXISTS: &str = "Email already exists";
pub(crate) const MSG_BAD_CREDENTIALS: &str = "Bad email or password";
pub(crate) const MSG_USER_CREATED: &str = "User created successfully.";
