//! Core error types for the Fundshare engine.
//!
//! Every failure the engine can produce is an input validation failure and is
//! reported before any part of a result is built. Report rendering adds its
//! own variant for writer failures.

use std::fmt;

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the distribution engine and its renderers.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Report rendering failed: {0}")]
    Report(String),
}

impl Error {
    /// True for every error that stems from a malformed request.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Which side of the distribution a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSide {
    Contributor,
    Receiver,
}

impl fmt::Display for GroupSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupSide::Contributor => write!(f, "contributor"),
            GroupSide::Receiver => write!(f, "receiver"),
        }
    }
}

/// Validation errors for distribution requests.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("The {side} group '{group}' has no members")]
    EmptyGroup { side: GroupSide, group: String },

    #[error("Total amount must be positive, got {0}")]
    NonPositiveTotal(f64),
}

// === From implementations for common error types ===

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Report(err.to_string())
    }
}

impl From<printpdf::Error> for Error {
    fn from(err: printpdf::Error) -> Self {
        Error::Report(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
