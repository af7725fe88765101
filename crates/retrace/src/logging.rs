//! Tracing subscriber setup.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

fn env_filter(log: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log.filter()))
}

/// Logs to the configured file so output does not interfere with the TUI.
pub fn init_file_logging(log: &LogConfig) -> Result<()> {
    let log_file = std::fs::File::create(log.file())
        .with_context(|| format!("Failed to create log file {}", log.file().display()))?;
    // Don't panic if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Logs to stderr, leaving stdout for command output.
pub fn init_stderr_logging(log: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(log))
        .with_writer(std::io::stderr)
        .try_init();
}
