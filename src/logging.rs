//! Logging setup built on `tracing` and `tracing-subscriber`.
//!
//! The terminal belongs to the form while it runs, so log events only go to
//! a file. Without a file no subscriber is installed and every event is
//! dropped.
//!
//! Levels used by the crate:
//! - `warn`: actions the session refused (bad index, open confirmation)
//! - `info`: store size changes, export
//! - `debug`: every dispatched action, validation rejections
//!
//! Field contents never appear in events; only indices and counts do.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Where and how verbosely to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Honour `RUST_LOG` instead of `level_filter` when it is set.
    pub use_env_filter: bool,
    pub log_file: Option<PathBuf>,
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            log_file: None,
            with_target: true,
        }
    }
}

impl LogConfig {
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_level(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self.use_env_filter = false;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        let fallback = || EnvFilter::new(self.level_filter.to_string());
        if self.use_env_filter {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
        } else {
            fallback()
        }
    }
}

/// Installs the global subscriber. Returns `false` when no log file is
/// configured and nothing was installed.
pub fn init_logging(config: &LogConfig) -> Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(config.with_target);

    tracing_subscriber::registry()
        .with(config.env_filter())
        .with(layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(true)
}
