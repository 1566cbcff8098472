use crate::{CoreError, MAX_EMAIL_LENGTH, NewUser};

use googletest::prelude::*;

#[test]
fn given_email_and_hash_when_new_then_names_default_to_empty() {
    let user = NewUser::new("a@x.com", "hash").unwrap();

    assert_that!(user.email, eq("a@x.com"));
    assert_that!(user.firstname, eq(""));
    assert_that!(user.lastname, eq(""));
}

#[test]
fn given_names_when_with_names_then_names_are_set() {
    let user = NewUser::new("a@x.com", "hash")
        .unwrap()
        .with_names("A", "B");

    assert_that!(user.firstname, eq("A"));
    assert_that!(user.lastname, eq("B"));
}

#[test]
fn given_empty_email_when_new_then_validation_error_names_field() {
    let result = NewUser::new("", "hash");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}

#[test]
fn given_empty_hash_when_new_then_validation_error_names_field() {
    let result = NewUser::new("a@x.com", "");

    assert!(matches!(
        result,
        Err(CoreError::Validation {
            field: "password",
            ..
        })
    ));
}

#[test]
fn given_email_at_length_limit_when_new_then_ok() {
    let email = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH - 6));

    let user = NewUser::new(email, "hash").unwrap();

    assert_that!(user.email.len(), eq(MAX_EMAIL_LENGTH));
}

#[test]
fn given_email_one_past_limit_when_new_then_validation_error_names_field() {
    let email = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH - 5));

    let result = NewUser::new(email, "hash");

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "email", .. })
    ));
}
