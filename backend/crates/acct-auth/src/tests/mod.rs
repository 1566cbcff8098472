mod authenticated_user;

use crate::CredentialHasher;

/// Cheap Argon2 parameters so tests stay fast in debug builds
pub(crate) fn fast_hasher() -> CredentialHasher {
    CredentialHasher::with_params(8, 1, 1).unwrap()
}
