//! Logging setup over the `log` facade.

use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use ad_config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{info, Record};

/// Wire up fern per the logging config: a file sink when one is configured,
/// stdout otherwise. Every line reads `<rfc3339> LEVEL target: message`;
/// only the stdout sink colors the level.
pub fn initialize(config: &LoggingConfig, log_file: Option<PathBuf>) -> ServerErrorResult<()> {
    let sink = match log_file {
        Some(ref path) => {
            let file = fern::log_file(path).map_err(|e| ServerError::Logger {
                message: format!("cannot open log file {}: {e}", path.display()),
            })?;
            Dispatch::new().format(plain_line).chain(file)
        }
        None if config.colored => {
            let palette = ColoredLevelConfig::new()
                .trace(Color::BrightBlack)
                .debug(Color::Cyan)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} {}: {}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        palette.color(record.level()),
                        record.target(),
                        message
                    ))
                })
                .chain(std::io::stdout())
        }
        None => Dispatch::new().format(plain_line).chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(config.level_filter())
        .chain(sink)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("logger already initialized: {e}"),
        })?;

    // Route tracing events (axum/tower internals) through the log facade
    tracing_log::LogTracer::init().ok();

    match log_file {
        Some(path) => info!("Logging at '{}' to {}", config.level, path.display()),
        None => info!("Logging at '{}' to stdout", config.level),
    }

    Ok(())
}

fn plain_line(out: FormatCallback, message: &Arguments, record: &Record) {
    out.finish(format_args!(
        "{} {:<5} {}: {}",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        record.level(),
        record.target(),
        message
    ))
}
