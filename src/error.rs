//! Unified error types for chattab.
//!
//! This module provides a single [`ChattabError`] enum that covers every
//! failure the library can report. Note what is *not* here: a transcript
//! with zero records and a sender missing from the contact directory are
//! both ordinary outcomes, not errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chattab operations.
///
/// # Example
///
/// ```rust
/// use chattab::error::Result;
/// use chattab::RawRecord;
///
/// fn my_function() -> Result<Vec<RawRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChattabError>;

/// The error type for all chattab operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChattabError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript or contacts file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript bytes are not valid UTF-8.
    ///
    /// Fatal for the whole parse: no partial record set is produced.
    #[error("Failed to decode {context} as UTF-8 text{}: {source}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Decode {
        /// What was being decoded (e.g. "transcript")
        context: &'static str,
        /// The underlying UTF-8 error
        #[source]
        source: std::str::Utf8Error,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A configured header pattern is not a valid regular expression.
    #[error("Invalid header pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern that failed to compile
        pattern: String,
        /// The underlying regex error
        #[source]
        source: Box<regex::Error>,
    },

    /// A contact directory row could not be used.
    ///
    /// Rows are numbered from 1, matching what a spreadsheet would show.
    #[error("Invalid contact directory row {row}: {message}")]
    InvalidDirectory {
        /// 1-based row number in the contacts source
        row: u64,
        /// Description of what's wrong
        message: String,
    },

    /// An output format name or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization or config parsing error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChattabError {
    /// Creates a decode error for transcript content.
    pub fn decode(source: std::str::Utf8Error, path: Option<PathBuf>) -> Self {
        ChattabError::Decode {
            context: "transcript",
            source,
            path,
        }
    }

    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        ChattabError::InvalidPattern {
            pattern: pattern.into(),
            source: Box::new(source),
        }
    }

    /// Creates an invalid directory row error.
    pub fn invalid_directory(row: u64, message: impl Into<String>) -> Self {
        ChattabError::InvalidDirectory {
            row,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChattabError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChattabError::Io(_))
    }

    /// Returns `true` if the transcript could not be decoded as text.
    pub fn is_decode(&self) -> bool {
        matches!(self, ChattabError::Decode { .. })
    }

    /// Returns `true` if this is a header pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChattabError::InvalidPattern { .. })
    }

    /// Returns `true` if this is a contact directory error.
    pub fn is_invalid_directory(&self) -> bool {
        matches!(self, ChattabError::InvalidDirectory { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChattabError::InvalidFormat { .. })
    }
}
