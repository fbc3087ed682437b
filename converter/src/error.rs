//! Error types for the listing conversion pipeline.
//!
//! - [`CsvError`] - reading and decoding the input CSV
//! - [`OutputError`] - rendering and writing the JSON document
//! - [`ConvertError`] - top-level orchestration errors
//!
//! Field coercion never produces an error: bad values degrade to their
//! documented defaults inside [`crate::transform`].

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Input Errors
// =============================================================================

/// Errors while reading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to open or read the file.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV or non UTF-8 content.
    #[error("Invalid CSV at line {line}: {message}")]
    Parse { line: u64, message: String },
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io) => CsvError::Io(io),
            _ => CsvError::Parse { line, message },
        }
    }
}

// =============================================================================
// Output Errors
// =============================================================================

/// Errors while producing the JSON document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The output path could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Conversion Errors (top-level)
// =============================================================================

/// Top-level error returned by [`crate::pipeline::run`].
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be read.
    #[error("{0}")]
    Csv(#[from] CsvError),

    /// Output could not be produced.
    #[error("{0}")]
    Output(#[from] OutputError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Result type for the whole conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;
