mod config;
mod error;
mod logging_config;
mod server_config;
mod storage_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;
pub use upload_config::UploadConfig;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATA_FILENAME: &str = "listings.json";
const DEFAULT_UPLOAD_DIRECTORY: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;
const MAX_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;
const DEFAULT_LOG_LEVEL_NAME: &str = "info";
const DEFAULT_LOG_DIRECTORY: &str = "log";
