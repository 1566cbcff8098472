use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    /// Required, non-empty
    #[serde(default)]
    pub email: Option<String>,

    /// Required, non-empty
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub firstname: Option<String>,

    #[serde(default)]
    pub lastname: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("email", &self.email)
            .field("firstname", &self.firstname)
            .field("lastname", &self.lastname)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
