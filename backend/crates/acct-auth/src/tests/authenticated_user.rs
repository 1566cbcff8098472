use crate::{AuthError, AuthenticatedUser, Claims};

#[test]
fn test_from_claims_carries_email_and_times() {
    let claims = Claims::new("a@x.com", 1_700_000_000, 900);

    let user = AuthenticatedUser::from_claims(claims).unwrap();

    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.issued_at.timestamp(), 1_700_000_000);
    assert_eq!(user.expires_at.timestamp(), 1_700_000_900);
}

#[test]
fn test_from_claims_rejects_out_of_range_expiry() {
    let claims = Claims {
        sub: "a@x.com".to_string(),
        iat: 0,
        exp: i64::MAX,
    };

    let result = AuthenticatedUser::from_claims(claims);

    assert!(matches!(result, Err(AuthError::InvalidClaim { .. })));
}
