use acct_core::NewUser;

/// Creates a NewUser with a placeholder hash (the store treats it as opaque)
pub fn create_test_new_user(email: &str) -> NewUser {
    NewUser::new(email, "$argon2id$v=19$m=19456,t=2,p=1$dGVzdHNhbHQ$dGVzdGhhc2g")
        .expect("valid test user")
        .with_names("Test", "User")
}
