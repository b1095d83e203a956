use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_DIRECTORY, DEFAULT_LOG_LEVEL_NAME};

use log::LevelFilter;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of: off, error, warn, info, debug, trace (any case)
    pub level: String,
    /// Log directory, relative to the config directory
    pub dir: String,
    /// Log file name; `None` logs to stdout
    pub file: Option<String>,
    /// Colored output (ignored when logging to file)
    pub colored: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from(DEFAULT_LOG_LEVEL_NAME),
            dir: String::from(DEFAULT_LOG_DIRECTORY),
            file: None,
            colored: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.parse_level().is_none() {
            return Err(ConfigError::logging(format!(
                "logging.level must be one of off/error/warn/info/debug/trace, got '{}'",
                self.level
            )));
        }

        Ok(())
    }

    /// Effective level filter. Unknown names fall back to Info so logging
    /// still comes up even when `validate()` was skipped.
    pub fn level_filter(&self) -> LevelFilter {
        self.parse_level().unwrap_or(LevelFilter::Info)
    }

    fn parse_level(&self) -> Option<LevelFilter> {
        match self.level.to_lowercase().as_str() {
            "off" => Some(LevelFilter::Off),
            "error" => Some(LevelFilter::Error),
            "warn" => Some(LevelFilter::Warn),
            "info" => Some(LevelFilter::Info),
            "debug" => Some(LevelFilter::Debug),
            "trace" => Some(LevelFilter::Trace),
            _ => None,
        }
    }
}
