//! Error types for time-scale conversions.

use thiserror::Error;

/// Errors from time conversion or LSK parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// LSK file parsing failed.
    #[error("LSK parse error: {0}")]
    LskParse(String),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TimeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
