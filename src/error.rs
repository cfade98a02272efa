//! Error types for the phone book.
//!
//! Domain validation errors live in [`crate::domain::ValidationError`]; this
//! module covers persistence and configuration failures using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving, loading or exporting contacts.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Reading or writing a file failed
    #[error("I/O failure on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but cannot be turned back into contacts
    #[error("Corrupt contact data in {}: {reason}", .path.display())]
    CorruptState { path: PathBuf, reason: String },
}

impl PersistenceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorruptState {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with PersistenceError
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
