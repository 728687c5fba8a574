//! Tracing subscriber setup
//!
//! Logs go to a file; stdout belongs to the TUI.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber writing to `log_file_path`.
///
/// Filtering comes from `RUST_LOG`, with DEBUG as the default directive.
/// Returns false if the log file couldn't be created or a subscriber was
/// already installed.
pub fn init_global(log_file_path: &Path) -> bool {
    let log_file = match File::create(log_file_path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: could not create log file {}: {}",
                log_file_path.display(),
                e
            );
            return false;
        }
    };

    build_subscriber(log_file).try_init().is_ok()
}

/// Build a subscriber that writes formatted events to `log_file`.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into());

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(env_filter)
}
