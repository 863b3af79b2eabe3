//! Error types for the perf_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for perf_core operations
///
/// Numeric-domain failures of the strength formulas (division by zero,
/// logarithm of a non-positive argument) are deliberately not represented
/// here: formulas are permissive and surface those as IEEE inf/NaN.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Timestamp matched neither accepted layout
    #[error("Timestamp error: {0}")]
    Timestamp(String),

    /// Trace resolution error (index out of range, missing contents)
    #[error("Trace error: {0}")]
    Trace(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Formula name not recognized
    #[error("Unknown formula: {0}")]
    UnknownFormula(String),
}
