use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Image size cap in bytes
    pub max_bytes: usize,
    /// Accepted image content types
    pub allowed_types: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            allowed_types: vec![
                String::from("image/jpeg"),
                String::from("image/png"),
                String::from("image/webp"),
            ],
        }
    }
}

impl UploadConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bytes == 0 || self.max_bytes > MAX_MAX_UPLOAD_BYTES {
            return Err(ConfigError::upload(format!(
                "upload.max_bytes must be 1-{}, got {}",
                MAX_MAX_UPLOAD_BYTES, self.max_bytes
            )));
        }

        if self.allowed_types.is_empty() {
            return Err(ConfigError::upload("upload.allowed_types must not be empty"));
        }

        // Every configured type must map to an extension, or uploads of it
        // would pass config validation only to be rejected per request
        for content_type in &self.allowed_types {
            if extension(content_type).is_none() {
                return Err(ConfigError::upload(format!(
                    "upload.allowed_types entries must be one of \
                     image/jpeg, image/png, image/webp, image/gif; got '{content_type}'"
                )));
            }
        }

        Ok(())
    }

    /// File extension for an accepted content type; `None` when the type
    /// is not in `allowed_types`.
    pub fn extension_for(&self, content_type: &str) -> Option<&'static str> {
        if !self.allowed_types.iter().any(|t| t == content_type) {
            return None;
        }

        extension(content_type)
    }
}

fn extension(content_type: &str) -> Option<&'static str> {
    match content_type {
        "image/jpeg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}
