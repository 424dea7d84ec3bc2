//! Error types for data operations.

use thiserror::Error;

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur during data operations.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Requested column is not a numeric column of the dataset
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The source contained a header but no rows
    #[error("Dataset is empty: {0}")]
    EmptyDataset(String),

    /// No column could be interpreted as numeric
    #[error("No numeric columns found in {0}")]
    NoNumericColumns(String),
}
