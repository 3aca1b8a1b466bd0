//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular
//! crates like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Note that the parser never errors on an export that simply contains no
//! recognizable messages — it returns an empty record list. Emptiness only
//! becomes an error when a [`Summary`](crate::summary::Summary) is requested,
//! because the date range of zero records is undefined.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     // ... operations that may fail
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

    /// The input bytes could not be decoded as text.
    ///
    /// Decoding tries UTF-8 first and falls back to Latin-1, which accepts
    /// every byte value, so in practice this variant is unreachable. It is
    /// modeled anyway so callers can match on it.
    #[error("Could not decode input: {message}")]
    Decode {
        /// Description of what's wrong
        message: String,
    },

    /// No messages survived parsing.
    ///
    /// Either no line matched the entry pattern, or every matched entry had
    /// an unparsable timestamp. A summary cannot be built because the date
    /// range of an empty export is undefined.
    #[error("No messages found: {message}")]
    EmptyExport {
        /// Description of why the export came out empty
        message: String,
    },

    /// JSON serialization error.
    ///
    /// This can occur when writing the summary as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        ChatlensError::Decode {
            message: message.into(),
        }
    }

    /// Creates an empty-export error.
    pub fn empty_export(message: impl Into<String>) -> Self {
        ChatlensError::EmptyExport {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, ChatlensError::Decode { .. })
    }

    /// Returns `true` if this is an empty-export error.
    pub fn is_empty_export(&self) -> bool {
        matches!(self, ChatlensError::EmptyExport { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
