//! Logging setup for embedders that don't install their own subscriber

use tracing_subscriber::EnvFilter;

/// Initialize a plain stderr logger.
///
/// `RUST_LOG` takes precedence over `default_level`. Safe to call more
/// than once; later calls are no-ops.
pub fn init_logger(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
