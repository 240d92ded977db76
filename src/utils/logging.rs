//! Logging system initialization
//!
//! Sets up tracing-based logging with file output to `<data dir>/guessatron.log`
//! and rotation on application startup keeping 10 historical files.

use crate::config::ConfigManager;
use crate::error::{GuessatronError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Base name of the log file inside the data directory
const LOG_PREFIX: &str = "guessatron";

/// Maximum number of historical log files to keep (guessatron.log.1 through guessatron.log.9)
const MAX_LOG_FILES: u8 = 9;

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via `RUST_LOG` environment variable.
pub fn init_logging() -> Result<()> {
    let log_dir = ConfigManager::get_data_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_path = log_dir.join(format!("{LOG_PREFIX}.log"));
    rotate_logs_on_startup(&log_path)?;

    // Rotation is handled above, once per session
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_PREFIX)
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| GuessatronError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| GuessatronError::ConfigError(Box::new(e)))?;

    tracing::info!("Guessatron v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Rotate log files on application startup
///
/// - guessatron.log.9 is deleted
/// - guessatron.log.N -> guessatron.log.N+1 for N in 8..=1
/// - guessatron.log -> guessatron.log.1
///
/// A fresh guessatron.log is then created by the logger.
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| GuessatronError::ConfigError(StringError::new("Invalid log path")))?;

    let log_name = log_path
        .file_name()
        .ok_or_else(|| GuessatronError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        let next_log = log_dir.join(format!("{log_name}.{}", i + 1));

        if current_log.exists() {
            std::fs::rename(&current_log, &next_log)?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;

    Ok(())
}
