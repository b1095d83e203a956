use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATA_FILENAME, DEFAULT_UPLOAD_DIRECTORY};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Listings document, relative to the config directory
    pub data_file: String,
    /// Uploaded image directory, relative to the config directory
    pub upload_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: String::from(DEFAULT_DATA_FILENAME),
            upload_dir: String::from(DEFAULT_UPLOAD_DIRECTORY),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (key, value) in [
            ("storage.data_file", &self.data_file),
            ("storage.upload_dir", &self.upload_dir),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::storage(format!("{key} must not be empty")));
            }
            // Paths must stay inside the config directory
            if Path::new(value).is_absolute() || value.contains("..") {
                return Err(ConfigError::storage(format!(
                    "{key} must be relative and cannot contain '..', got '{value}'"
                )));
            }
        }

        Ok(())
    }
}
