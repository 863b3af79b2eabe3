#![forbid(unsafe_code)]

//! Core domain model for the Performance Analytics utilities.
//!
//! This crate provides:
//! - Strength-estimation formulas (Brzycki, Epley, McGlothin, Lombardi,
//!   Mayhew, O'Conner, Wathan) behind a single interface
//! - A nested training-log model with trace-based search
//! - Timestamp parsing for log records

pub mod config;
pub mod error;
pub mod formula;
pub mod log;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use formula::Formula;
pub use log::{filter, load_log, parse_timestamp, trace_access, Matches};
pub use types::*;
