//! Error handling for survey loading, feature derivation and exploration.

pub mod util;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Domain errors raised by the crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A named column is not part of the table
    #[error("Column not found: {column}")]
    ColumnNotFound { column: String },

    /// A column exists but its storage type cannot be used for the operation
    #[error("Column '{column}' has type {actual}, expected {expected}")]
    InvalidColumnType {
        column: String,
        expected: String,
        actual: String,
    },

    /// The input file extension is not a supported survey format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// An intake field violated its widget constraint
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// A column had no non-null values to chart
    #[error("Column '{0}' has no values")]
    EmptyColumn(String),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error decoding Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

impl Error {
    /// Shorthand for [`Error::InvalidInput`]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type used across the crate
pub type Result<T> = anyhow::Result<T>;
