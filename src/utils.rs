//! Utility functions used throughout the application

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("docbrowse-debug.log");
    path
}

/// Route tracing output to the debug log file
///
/// Only called with `--debug`: writing to stdout would corrupt the TUI.
/// `RUST_LOG` overrides the default `debug` level.
pub fn init_debug_logging() -> Result<PathBuf> {
    let path = get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install debug log subscriber: {}", e))?;

    Ok(path)
}
