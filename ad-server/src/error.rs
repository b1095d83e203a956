use std::path::PathBuf;
use std::result::Result as StdResult;

use thiserror::Error;

/// Startup-time server errors (configuration, logging, filesystem).
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ad_config::ConfigError,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = StdResult<T, ServerError>;
