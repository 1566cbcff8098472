use crate::Config;
use crate::tests::{EnvGuard, setup_valid_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Database
// =========================================================================

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _db = EnvGuard::set("ACCT_DATABASE_PATH", "/etc/users.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("database.path"));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _db = EnvGuard::set("ACCT_DATABASE_PATH", "../escape.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_database_path_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _db = EnvGuard::set("ACCT_DATABASE_PATH", "data/users.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_zero_max_connections_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _max = EnvGuard::set("ACCT_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_connections"));
}
