//! File logging via tracing
//!
//! The terminal belongs to the UI, so everything goes to a daily-rolling file
//! under the platform data directory. `AVTOREND_LOG` takes an `EnvFilter`
//! directive, e.g. `AVTOREND_LOG=avtorend_app::drawer=trace`.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

const LOG_FILE_PREFIX: &str = "avtorend.log";
const DEFAULT_DIRECTIVE: &str = "avtorend=info,avtorend_app=info,avtorend_api=info,warn";

/// Install the global subscriber. Returns the directory logs are written to.
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    init_in(&log_dir)?;
    Ok(log_dir)
}

/// Install the global subscriber writing into `log_dir`.
pub fn init_in(log_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(log_dir)
        .context(format!("creating log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_PREFIX);
    let filter = EnvFilter::try_from_env("AVTOREND_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| crate::Error::config(format!("logging already initialised: {}", e)))?;

    tracing::debug!("Logging to {}", log_dir.display());
    Ok(())
}

/// `<data dir>/avtorend/logs`, or `./avtorend/logs` without a data dir.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("avtorend")
        .join("logs")
}
