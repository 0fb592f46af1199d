//! Error types for gapscan operations.
//!
//! This module defines [`GapscanError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GapscanError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GapscanError::Other`) for unexpected errors
//! - A parse failure is fatal: the scan stops at the first malformed record

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gapscan operations.
#[derive(Debug, Error)]
pub enum GapscanError {
    /// A line could not be split into exactly two integers.
    #[error("Parse error on line {line}: {message} (got {content:?})")]
    ParseError {
        line: usize,
        content: String,
        message: String,
    },

    /// The input file to scan does not exist.
    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gapscan operations.
pub type Result<T> = std::result::Result<T, GapscanError>;
