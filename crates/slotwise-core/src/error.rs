//! Core error types for slotwise-core.
//!
//! This module defines the error hierarchy using thiserror so failures can
//! be matched and reported uniformly across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for slotwise-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Interval/time parsing errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors from parsing time-of-day text.
///
/// A structurally valid interval whose start is not before its end is NOT a
/// parse error; such intervals pass through and the sweep guards suppress
/// their effects downstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Text is not of the form `HH:MM-HH:MM`
    #[error("malformed interval '{text}': expected HH:MM-HH:MM")]
    MalformedInterval { text: String },

    /// Text is not of the form `HH:MM`
    #[error("malformed time '{text}': expected HH:MM")]
    MalformedTime { text: String },
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
