//! Core error types for questlog-core.
//!
//! Errors are grouped by the failure they describe: malformed persisted
//! records, rejected operations, configuration problems, and plain IO.
//! None of them is fatal to the process; every failure is recoverable at
//! the call site.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for questlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed persisted record
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Rejected operation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single persisted record could not be decoded.
///
/// During a bulk load the offending line is dropped and processing
/// continues; this error never escapes [`crate::GoalStore::load`].
#[derive(Error, Debug)]
pub enum ParseError {
    /// Record has the wrong number of `|`-delimited fields for its tag
    #[error("record '{tag}' expects {expected} fields, found {found}")]
    FieldCount {
        tag: String,
        expected: usize,
        found: usize,
    },

    /// A numeric field did not parse
    #[error("invalid integer in field '{field}': '{value}'")]
    InvalidInt { field: &'static str, value: String },

    /// A boolean field did not parse
    #[error("invalid boolean in field '{field}': '{value}'")]
    InvalidBool { field: &'static str, value: String },
}

/// Validation errors.
///
/// A rejected operation yields no point delta and mutates no state.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
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
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
