use crate::User;

fn sample_user() -> User {
    User {
        id: 7,
        firstname: Some("Ada".to_string()),
        lastname: Some("Lovelace".to_string()),
        email: "ada@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

#[test]
fn test_user_serialization_omits_password_hash() {
    let user = sample_user();

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["id"], 7);
    assert!(json.get("password_hash").is_none());
}

#[test]
fn test_user_debug_redacts_password_hash() {
    let user = sample_user();

    let debug = format!("{:?}", user);

    assert!(debug.contains("ada@example.com"));
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("argon2id"));
}

#[test]
fn test_display_name_joins_present_parts() {
    let mut user = sample_user();
    assert_eq!(user.display_name().as_deref(), Some("Ada Lovelace"));

    user.lastname = Some(String::new());
    assert_eq!(user.display_name().as_deref(), Some("Ada"));

    user.firstname = None;
    assert_eq!(user.display_name(), None);
}
