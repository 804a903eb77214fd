//! Error types for phonerecall
//!
//! Only `Validation` is an outcome callers are expected to handle routinely.
//! A missing contact is not an error at all: it is reported through
//! `UpdateOutcome::NotFound` or a `false` return from `delete`.
//! Read-side storage failures and formatting failures are absorbed by the
//! layers that encounter them and never reach this type.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use std::io;
use thiserror::Error;

/// Result type alias for phonerecall operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for phonerecall
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was empty after trimming
    #[error("Validation error: {field} {reason}")]
    Validation {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A persisted blob could not be decoded
    #[error("Storage corruption at '{key}': {reason}")]
    StorageCorruption {
        /// Storage key holding the bad blob
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O error (file backend)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serialization error while encoding a blob
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Country code is not in the supported table
    #[error("Unsupported country code: '{0}'")]
    InvalidCountry(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error for an empty required field
    pub fn empty_field(field: &'static str) -> Self {
        Error::validation(field, "must not be empty")
    }

    /// Create a validation error with a custom reason
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Create a storage corruption error
    pub fn corruption(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::StorageCorruption {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Check whether this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
