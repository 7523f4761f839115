//! Tracing initialization for the demo binary.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default so the REPL display stays clean.
/// Set `TASKSTORE_LOG` to a file path to enable it; the filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var("TASKSTORE_LOG") else {
        // No logging configured - skip initialization entirely
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {log_path}");
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
