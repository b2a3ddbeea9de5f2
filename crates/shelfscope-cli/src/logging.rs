//! File logging, so the TUI screen stays clean.

use anyhow::Result;
use shelfscope_core::AppConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "SHELFSCOPE_LOG";
const DEFAULT_FILTER: &str = "shelfscope=info";

/// `RUST_LOG` wins over `SHELFSCOPE_LOG`, which wins over the default.
fn filter_directive() -> String {
    std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string())
}

pub fn initialize_logging() -> Result<()> {
    let log_path = AppConfig::log_path();
    if let Some(dir) = log_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let log_file = std::fs::File::create(&log_path)?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(filter_directive()));
    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(())
}
