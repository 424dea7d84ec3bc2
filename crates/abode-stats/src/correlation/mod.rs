//! Factor correlation estimation
//!
//! Provides the [`CorrelationMatrix`] value type and estimators that build it
//! from aligned indicator series.

pub mod matrix;
pub mod pearson;

pub use matrix::CorrelationMatrix;
pub use pearson::{PearsonConfig, PearsonEstimator};

use ndarray::Array2;
use thiserror::Error;

/// Errors that can occur while building or estimating a correlation matrix
#[derive(Debug, Error)]
pub enum CorrelationError {
    /// Dimension mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension
        actual: usize,
    },

    /// A factor name appears more than once
    #[error("Duplicate factor: {0}")]
    DuplicateFactor(String),

    /// A nested mapping lacks an entry for a pair of factors
    #[error("Missing correlation entry for ({row}, {column})")]
    MissingEntry {
        /// Row factor
        row: String,
        /// Column factor
        column: String,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Trait for correlation matrix estimators
pub trait CorrelationEstimator {
    /// Estimate the correlation matrix of named series
    ///
    /// # Arguments
    /// * `names` - Factor names, one per column of `data`
    /// * `data` - Matrix where each row is an observation and each column is a factor;
    ///   `NaN` marks a missing observation
    ///
    /// # Returns
    /// * Named N x N correlation matrix
    fn estimate(
        &self,
        names: &[String],
        data: &Array2<f64>,
    ) -> Result<CorrelationMatrix, CorrelationError>;
}
