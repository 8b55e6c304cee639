//! Error types for the planbook ecosystem.

use thiserror::Error;

/// Errors that can occur in planbook operations.
///
/// Layout computation itself never fails; partially-specified items are
/// absorbed with safe defaults. These errors cover the surrounding
/// concerns of configuration and import.
#[derive(Error, Debug)]
pub enum PlanbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid day window: starts at {start}:00 but ends at {end}:00")]
    InvalidDayWindow { start: u32, end: u32 },

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planbook operations.
pub type PlanbookResult<T> = Result<T, PlanbookError>;
