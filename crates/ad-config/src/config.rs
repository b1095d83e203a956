use crate::{
    ConfigError, ConfigErrorResult, LoggingConfig, ServerConfig, StorageConfig, UploadConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub upload: UploadConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for ADS_CONFIG_DIR env var, else use ./.ads/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ADS_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ADS_CONFIG_DIR env var > ./.ads/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("ADS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".ads"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("ADS_SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(raw) = std::env::var("ADS_SERVER_PORT") {
            if let Ok(port) = raw.parse() {
                self.server.port = port;
            }
        }
        if let Ok(raw) = std::env::var("ADS_LOG_LEVEL") {
            // Checked by validate(), not here
            self.logging.level = raw;
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.upload.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Absolute path to the listings document.
    pub fn data_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.data_file))
    }

    /// Absolute path to the upload directory.
    pub fn upload_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.storage.upload_dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log a one-line summary of the effective configuration.
    pub fn log_summary(&self) {
        info!(
            "Config: server {}:{}, data '{}', uploads '{}', upload cap {} bytes",
            self.server.host,
            self.server.port,
            self.storage.data_file,
            self.storage.upload_dir,
            self.upload.max_bytes
        );
    }
}
