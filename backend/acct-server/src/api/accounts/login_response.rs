use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub access_token: String,
}
