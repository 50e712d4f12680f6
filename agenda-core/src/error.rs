//! Error types for the agenda engine.

use thiserror::Error;

/// Errors that can occur while building or configuring a calendar.
///
/// Lookups that miss (a position past the end, a date outside the range)
/// are not errors; they return `None`.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid calendar range: {0}")]
    InvalidRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown locale '{0}'")]
    UnknownLocale(String),

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
