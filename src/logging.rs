//! Optional file logger. The terminal itself is the UI surface, so log output
//! goes to a file next to the settings, and only when `RUST_LOG` is set.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app::settings::log_file_path;

pub fn init() -> Result<()> {
    let Ok(filter) = std::env::var("RUST_LOG") else {
        return Ok(());
    };
    let Some(path) = log_file_path() else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("creating log directory failed")?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {} failed", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
