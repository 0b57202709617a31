//! Custom error types for the cedict-pinyin crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Errors are only produced while loading a dictionary. Conversion never fails.
#[derive(Debug, Error)]
pub enum CedictError {
    /// An error originating from I/O operations (missing file, unreadable data,
    /// invalid UTF-8 in the dictionary text).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The compressed container could not be decoded.
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// A non-comment, non-empty line could not be split into two headwords
    /// and a bracketed pronunciation.
    #[error("Invalid entry at line {line_number}: {line}")]
    Parse { line_number: usize, line: String },
}

impl CedictError {
    pub(crate) fn parse(line_number: usize, line: impl Into<String>) -> Self {
        Self::Parse {
            line_number,
            line: line.into(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `CedictError` type.
pub type Result<T> = std::result::Result<T, CedictError>;
