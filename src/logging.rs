//! Debug logging setup
//!
//! With `--debug`, tracing events go to a log file in the temp directory.
//! `RUST_LOG` overrides the default `stackdeck=debug` filter. Without
//! `--debug` no subscriber is installed and events are discarded.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "stackdeck=debug";

// Keeps the non-blocking writer flushing until the process exits
static LOG_GUARD: OnceLock<Mutex<Option<WorkerGuard>>> = OnceLock::new();

pub fn init_logging(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("can't open debug log {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let _ = LOG_GUARD.set(Mutex::new(Some(guard)));

    let filter = build_filter()?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("can't initialize tracing subscriber")?;

    Ok(())
}

/// Flush buffered log lines; called once before exit
pub fn shutdown_logging() {
    if let Some(lock) = LOG_GUARD.get() {
        if let Ok(mut guard) = lock.lock() {
            guard.take();
        }
    }
}

fn build_filter() -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::builder()
        .parse(DEFAULT_FILTER)
        .context("invalid logging filter")
}
