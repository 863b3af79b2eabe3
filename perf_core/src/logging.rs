//! Logging infrastructure for the performance utilities.
//!
//! Centralized tracing setup shared by every binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with sensible defaults
///
/// Filtering comes from the RUST_LOG environment variable when set,
/// otherwise the INFO level is used. Output is the compact fmt layer.
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
///
/// The RUST_LOG environment variable still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}
