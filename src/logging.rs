//! Tracing setup.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing for TUI mode.
///
/// Logging is disabled by default: the terminal is owned by the UI and a
/// stdout subscriber would corrupt the display. Set `CIPHERSCOPE_LOG` to a
/// file path to enable logging to that file.
pub fn init_file_tracing() {
    let Ok(log_path) = std::env::var("CIPHERSCOPE_LOG") else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Initialize tracing for one-shot subcommands.
///
/// Logs go to stderr so they never mix with the command's stdout output.
/// Filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_stderr_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}
