use crate::LoggingConfig;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use log::LevelFilter;

#[test]
fn given_default_logging_config_when_validate_then_ok() {
    let config = LoggingConfig::default();
    assert_that!(config.validate(), ok(anything()));
    assert_that!(config.level_filter(), eq(LevelFilter::Info));
}

#[test]
fn given_level_in_any_case_when_level_filter_then_parsed() {
    for (name, expected) in [
        ("off", LevelFilter::Off),
        ("ERROR", LevelFilter::Error),
        ("Warn", LevelFilter::Warn),
        ("debug", LevelFilter::Debug),
        ("trace", LevelFilter::Trace),
    ] {
        let config = LoggingConfig {
            level: String::from(name),
            ..Default::default()
        };
        assert_that!(config.validate(), ok(anything()));
        assert_that!(config.level_filter(), eq(expected));
    }
}

#[test]
fn given_unknown_level_when_validate_then_error() {
    let config = LoggingConfig {
        level: String::from("verbose"),
        ..Default::default()
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_unknown_level_when_level_filter_then_falls_back_to_info() {
    let config = LoggingConfig {
        level: String::from("verbose"),
        ..Default::default()
    };
    assert_that!(config.level_filter(), eq(LevelFilter::Info));
}
