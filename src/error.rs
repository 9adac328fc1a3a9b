//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Parsing-stage** failures (nothing in the file looks like a chat
//!   export) are fatal and reported once as [`ChatlensError::UnparseableFile`]
//! - **Record-level** failures (one timestamp that does not parse under the
//!   chosen date order) are never errors; the record is dropped
//! - **Empty scopes** are never errors; aggregators return zero / empty results

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::RawMessage;
///
/// fn my_function() -> Result<Vec<RawMessage>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No message could be extracted from the export.
    ///
    /// Raised when a non-blank input contains zero lines matching the
    /// `DATE, TIME - ...` message-start pattern.
    #[error("Unparseable chat export{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    UnparseableFile {
        /// User-facing description of what's wrong
        message: String,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The file format doesn't match the expected structure.
    ///
    /// Used for output paths with an unknown extension.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The analyzer configuration is inconsistent or could not be loaded.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates an unparseable-file error.
    pub fn unparseable(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ChatlensError::UnparseableFile {
            message: message.into(),
            path,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ChatlensError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Attaches a file path to an [`UnparseableFile`](Self::UnparseableFile) error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            ChatlensError::UnparseableFile { message, .. } => ChatlensError::UnparseableFile {
                message,
                path: Some(new_path.into()),
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the export could not be parsed at all.
    pub fn is_unparseable(&self) -> bool {
        matches!(self, ChatlensError::UnparseableFile { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self, ChatlensError::InvalidConfig { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
