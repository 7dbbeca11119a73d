//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the `RUST_LOG` environment variable for filtering. Call once at
/// application startup, before the first picking pass.
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a default filter level
///
/// Like [`init`], but falls back to the given filter when `RUST_LOG` is not
/// set. Useful for demo binaries that should be chatty out of the box.
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
