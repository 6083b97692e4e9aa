//! Error types and result type for the congkit crate.
//!
//! This module defines all error variants that can occur while reading a source
//! table, generating the radical database, or looking up characters. It uses the
//! `snafu` library for ergonomic error handling with automatic backtrace capture.
//!
//! # Examples
//!
//! ```
//! use congkit::{CongkitError, Result};
//!
//! fn open_table(path: &str) -> Result<()> {
//!     if path.is_empty() {
//!         return Err(CongkitError::invalid_parameter("Table path cannot be empty"));
//!     }
//!     Ok(())
//! }
//!
//! match open_table("") {
//!     Ok(()) => println!("opened"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! # Error Variants
//!
//! - [`CongkitError::Io`]: I/O errors from file operations
//! - [`CongkitError::MalformedEntry`]: A source table line with too few fields
//! - [`CongkitError::Database`]: SQLite failures, tagged with the phase that failed
//! - [`CongkitError::RowScan`]: Combined row failures of a single lookup
//! - [`CongkitError::InvalidDataFormat`]: Rows that cannot be converted
//! - [`CongkitError::ParserError`]: JSON configuration parsing errors

use std::io;
use snafu::{Snafu, Backtrace};

// Re-export snafu for context providers
pub use snafu;

/// Main error type for the congkit crate.
///
/// All errors include automatic backtrace capture for debugging purposes.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CongkitError {
    /// I/O error occurred during file operations.
    #[snafu(display("IO error: {source}"))]
    Io {
        source: io::Error,
        backtrace: Backtrace,
    },

    /// A source table line has fewer fields than a character entry requires.
    #[snafu(display("line {line_no}: malformed entry, expected at least {expected} fields, got {field_count}"))]
    MalformedEntry {
        line_no: usize,
        field_count: usize,
        expected: usize,
        backtrace: Backtrace,
    },

    /// SQLite reported an error. `phase` names the step that failed.
    #[snafu(display("Database error while {phase}: {source}"))]
    Database {
        phase: String,
        source: rusqlite::Error,
        backtrace: Backtrace,
    },

    /// One or more result rows of a lookup failed to decode.
    #[snafu(display("Failed reading {} result row(s): {}", failures.len(), join_failures(failures)))]
    RowScan {
        failures: Vec<rusqlite::Error>,
        backtrace: Backtrace,
    },

    /// Error parsing JSON configuration.
    #[snafu(display("Parser error: {source}"))]
    ParserError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
        backtrace: Backtrace,
    },

    /// Table data doesn't match the expected layout.
    #[snafu(display("Invalid data format: {message}"))]
    InvalidDataFormat {
        message: String,
        backtrace: Backtrace,
    },

    /// Function was called with invalid parameters.
    #[snafu(display("Invalid parameter: {message}"))]
    InvalidParameter {
        message: String,
        backtrace: Backtrace,
    },

    /// Operation was interrupted by the progress callback.
    #[snafu(display("User interrupted"))]
    UserInterrupted {
        backtrace: Backtrace,
    },
}

fn join_failures(failures: &[rusqlite::Error]) -> String {
    failures
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<io::Error> for CongkitError {
    fn from(source: io::Error) -> Self {
        Self::Io { source, backtrace: Backtrace::capture() }
    }
}

impl From<serde_json::Error> for CongkitError {
    fn from(source: serde_json::Error) -> Self {
        Self::ParserError {
            source: Box::new(source),
            backtrace: Backtrace::capture(),
        }
    }
}

/// Helper methods for creating errors without context providers.
impl CongkitError {
    /// Creates an `InvalidParameter` error with the given message.
    ///
    /// # Examples
    ///
    /// ```
    /// use congkit::CongkitError;
    ///
    /// let error = CongkitError::invalid_parameter("Path cannot be empty");
    /// ```
    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Self::InvalidParameter {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates an `InvalidDataFormat` error with the given message.
    pub fn invalid_data_format<S: Into<String>>(message: S) -> Self {
        Self::InvalidDataFormat {
            message: message.into(),
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `MalformedEntry` error for a 1-based line number.
    pub fn malformed_entry(line_no: usize, field_count: usize, expected: usize) -> Self {
        Self::MalformedEntry {
            line_no,
            field_count,
            expected,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `RowScan` error from the accumulated row failures.
    pub fn row_scan(failures: Vec<rusqlite::Error>) -> Self {
        Self::RowScan {
            failures,
            backtrace: Backtrace::capture(),
        }
    }

    /// Creates a `UserInterrupted` error.
    pub fn user_interrupted() -> Self {
        Self::UserInterrupted {
            backtrace: Backtrace::capture(),
        }
    }

    /// Checks if this error is a `MalformedEntry` variant.
    pub fn is_malformed_entry(&self) -> bool {
        matches!(self, CongkitError::MalformedEntry { .. })
    }

    /// Returns the failing line number of a `MalformedEntry` error.
    pub fn line_no(&self) -> Option<usize> {
        if let CongkitError::MalformedEntry { line_no, .. } = self {
            return Some(*line_no);
        }
        None
    }
}

/// A specialized `Result` type for congkit operations.
///
/// This is a convenience type alias that uses [`CongkitError`] as the error type.
pub type Result<T> = std::result::Result<T, CongkitError>;
