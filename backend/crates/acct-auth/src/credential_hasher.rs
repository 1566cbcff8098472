use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use argon2::password_hash::{
    PasswordHash, PasswordHasher, PasswordVerifier, Salt, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use error_location::ErrorLocation;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Input for the hash that login verifies against when the email is
/// unknown. No account can hold it because it is never stored.
const DUMMY_PASSWORD: &str = "dummy-password-for-unknown-accounts";

/// Argon2id password hashing with a fresh OS-random salt per hash.
///
/// Output is a PHC string (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`) that
/// embeds the salt and parameters, so verification needs nothing else.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl CredentialHasher {
    /// Hasher with the argon2 crate's default Argon2id parameters.
    #[track_caller]
    pub fn new() -> AuthErrorResult<Self> {
        Self::from_argon2(Argon2::default())
    }

    /// Hasher with explicit cost parameters.
    #[track_caller]
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::PasswordHash {
                message: format!("invalid Argon2 parameters: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Self::from_argon2(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    #[track_caller]
    fn from_argon2(argon2: Argon2<'static>) -> AuthErrorResult<Self> {
        let mut hasher = Self {
            argon2,
            dummy_hash: String::new(),
        };
        hasher.dummy_hash = hasher.hash(DUMMY_PASSWORD)?;
        Ok(hasher)
    }

    /// Hash a plaintext password into a PHC string.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; Salt::RECOMMENDED_LENGTH];
        OsRng
            .try_fill_bytes(&mut salt_bytes)
            .map_err(|e| AuthError::PasswordHash {
                message: format!("salt generation failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    /// True iff `plaintext` matches `hash`. A malformed or foreign hash
    /// string is a mismatch, not an error.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                log::debug!("Unparseable password hash: {}", e);
                false
            }
        }
    }

    /// Hash to verify against when no account matched, so unknown emails
    /// cost the same as wrong passwords.
    pub fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }
}

impl fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHasher")
            .field("params", self.argon2.params())
            .finish_non_exhaustive()
    }
}
