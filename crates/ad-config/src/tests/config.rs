use crate::tests::{setup_config_dir, EnvGuard};
use crate::Config;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _env = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.storage.data_file.as_str(), eq("listings.json"));
    assert_that!(config.upload.max_bytes, eq(crate::DEFAULT_MAX_UPLOAD_BYTES));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _env = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [server]
            port = 9000

            [storage]
            data_file = "ads.json"

            [upload]
            max_bytes = 1048576
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.storage.data_file.as_str(), eq("ads.json"));
    assert_that!(config.upload.max_bytes, eq(1048576));
}

#[test]
#[serial]
fn given_env_overrides_when_load_then_env_wins() {
    // Given
    let _env = setup_config_dir();
    let _port = EnvGuard::set("ADS_SERVER_PORT", "9191");
    let _host = EnvGuard::set("ADS_SERVER_HOST", "0.0.0.0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9191));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
}

#[test]
#[serial]
fn given_log_level_env_when_load_then_level_overridden() {
    // Given
    let _env = setup_config_dir();
    let _level = EnvGuard::set("ADS_LOG_LEVEL", "debug");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.as_str(), eq("debug"));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_bad_log_level_env_when_validate_then_error() {
    // Given
    let _env = setup_config_dir();
    let _level = EnvGuard::set("ADS_LOG_LEVEL", "loud");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_config_dir_env_when_data_path_then_inside_that_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let data_path = config.data_path().unwrap();

    // Then
    assert_that!(data_path.starts_with(temp.path()), eq(true));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "this is { not toml").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_escaping_data_file_when_validate_then_storage_error() {
    // Given
    let _env = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.storage.data_file = String::from("../outside.json");

    // When
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
