use std::fmt;
use std::time::Duration;

/// Signing configuration shared by [`crate::JwtIssuer`] and
/// [`crate::JwtValidator`]. Built once at startup and never rotated while
/// the process runs.
#[derive(Clone)]
pub struct JwtSettings {
    /// HS256 secret
    pub secret: Vec<u8>,
    /// Lifetime of an issued token
    pub ttl: Duration,
    /// Clock skew tolerance applied to `exp`
    pub leeway_secs: u64,
}

impl JwtSettings {
    pub fn new(secret: impl Into<Vec<u8>>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
            leeway_secs: 30,
        }
    }

    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = leeway_secs;
        self
    }
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}
