//! Error types for the days event log.

use thiserror::Error;

/// Errors that can occur in days operations.
#[derive(Error, Debug)]
pub enum DaysError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("Missing {0}.")]
    MissingParameter(&'static str),

    #[error("Invalid options")]
    InvalidOptions,

    #[error("Events file has no '{0}' column")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for days operations.
pub type DaysResult<T> = Result<T, DaysError>;
