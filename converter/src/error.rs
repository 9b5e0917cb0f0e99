//! Error types for the KiCad to NeoDen conversion.
//!
//! - [`ValueError`] - a single value transform failed
//! - [`TransformError`] - converting one row failed
//! - [`CsvError`] - reading the position file failed
//! - [`WriteError`] - writing the NeoDen file failed
//! - [`PipelineError`] - top-level, wraps everything above
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Value Transform Errors
// =============================================================================

/// Errors raised by the numeric value transforms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// Input does not parse as a finite decimal number.
    #[error("'{value}' is not a decimal number")]
    MalformedNumeric { value: String },
}

// =============================================================================
// Row Conversion Errors
// =============================================================================

/// Errors while converting one input row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Required source column missing from the row.
    #[error("Line {line}: missing field '{field}'")]
    MissingField { field: String, line: usize },

    /// A transform rejected the source value.
    #[error("Line {line}, field '{field}' (value '{value}'): {source}")]
    InvalidValue {
        field: String,
        value: String,
        line: usize,
        #[source]
        source: ValueError,
    },
}

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the position file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode the file contents.
    #[error("Failed to decode input: {0}")]
    Encoding(String),

    /// Invalid CSV format.
    #[error("Line {line}: invalid CSV: {message}")]
    Parse { line: usize, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Writing Errors
// =============================================================================

/// Errors while writing the NeoDen file.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create or flush the output.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serializer failure.
    #[error("Failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level conversion errors.
///
/// This is the error type returned by [`crate::transform::pipeline::convert_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Reading error.
    #[error("Input error: {0}")]
    Csv(#[from] CsvError),

    /// Row conversion error.
    #[error("Conversion error: {0}")]
    Transform(#[from] TransformError),

    /// Writing error.
    #[error("Output error: {0}")]
    Write(#[from] WriteError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for value transforms.
pub type ValueResult<T> = Result<T, ValueError>;

/// Result type for row conversion.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for writing.
pub type WriteResult<T> = Result<T, WriteError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
