//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "hdash.log";
const DEFAULT_FILTER: &str = "huntarr_dash=info,hdash_app=info,hdash_client=info,hdash_tui=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/huntarr-dash/logs/` so that nothing
/// reaches stdout while the TUI owns the terminal.
/// Log level is controlled by the `HDASH_LOG` environment variable.
///
/// # Examples
/// ```bash
/// HDASH_LOG=debug hdash
/// HDASH_LOG=hdash_client=trace hdash --view logs
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env("HDASH_LOG").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("huntarr-dash starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("huntarr-dash").join("logs")
}

/// Get the log file path base name (the appender adds a date suffix)
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_app_directory() {
        let path = get_current_log_file();
        assert!(path.ends_with("huntarr-dash/logs/hdash.log"));
    }
}
