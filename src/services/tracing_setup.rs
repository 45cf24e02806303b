//! Tracing subscriber setup
//!
//! Shared between the binary and tests. Output always goes to a file; the
//! terminal belongs to the UI.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Filtering comes from `RUST_LOG`, with a DEBUG directive added on top.
pub fn init_global(log_file_path: &Path) -> std::io::Result<()> {
    let log_file = File::create(log_file_path)?;
    build_subscriber(log_file).init();
    Ok(())
}

/// Build the subscriber: an env filter plus a plain fmt layer on `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
