//! Structured logging with tracing
//!
//! Configures a `tracing-subscriber` registry with an environment filter
//! (overridable through `COORD_LOG`), optional JSON output and an optional
//! daily rolling log file.

use crate::constants::{DEFAULT_LOG_FILE_STEM, LOG_FILTER_ENV};
use crate::error_ext::ErrorContext;
use coord_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// Fails if the level is unknown or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_name()
                .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE_STEM)),
        )
    });

    // json and plain layers have different types, hence the two branches
    let registry = Registry::default().with(filter);
    let initialized = if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    } else {
        let stdout = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        let file = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
        });
        registry.with(stdout).with(file).try_init()
    };
    initialized.config_context("Failed to install the global tracing subscriber")?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log configuration loading status
pub fn log_config_loaded(config_path: &Path, success: bool) {
    if success {
        info!("Configuration loaded from {}", config_path.display());
    } else {
        warn!("Configuration file not found: {}", config_path.display());
    }
}

/// Log health check result
pub fn log_health_check(component: &str, healthy: bool, details: Option<&str>) {
    if healthy {
        debug!(component, "Health check passed");
    } else {
        error!(
            component,
            details = details.unwrap_or("Unknown failure"),
            "Health check failed"
        );
    }
}
