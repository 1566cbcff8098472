use crate::Config;
use crate::tests::{EnvGuard, setup_valid_env};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_plain_log_file_name_when_validate_then_ok() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _file = EnvGuard::set("ACCT_LOG_FILE", "acct-server.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    // Given
    let (_temp, _dir, _secret) = setup_valid_env();
    let _file = EnvGuard::set("ACCT_LOG_FILE", "nested/server.log");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
