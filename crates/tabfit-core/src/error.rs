#![forbid(unsafe_code)]

//! Error type for the fallible edges of tabfit.
//!
//! The overflow calculator itself never fails. Errors only come from loading
//! item lists or configuration, and from validating them.

use std::fmt;

/// Top-level error type for tabfit.
#[derive(Debug)]
pub enum Error {
    /// Malformed JSON for an item list or a configuration.
    Json(serde_json::Error),
    /// Two items share the same `value` key.
    DuplicateValue(String),
    /// A configuration value is out of range (negative or non-finite).
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::DuplicateValue(value) => write!(f, "duplicate item value {value:?}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for tabfit APIs.
pub type Result<T> = std::result::Result<T, Error>;
