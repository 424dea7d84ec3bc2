//! Multiple linear regression
//!
//! Ordinary least squares with an intercept, reporting the fit statistics
//! used to compare factor selections: R², adjusted R², the overall
//! F-statistic and its p-value.

pub mod linalg;
pub mod ols;

pub use ols::OlsRegression;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fitting a regression
#[derive(Debug, Error)]
pub enum RegressionError {
    /// No regressors were supplied
    #[error("Regression needs at least one regressor")]
    EmptyDesign,

    /// Dimension mismatch
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Too few observations for the number of parameters
    #[error("Insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations
        required: usize,
        /// Actual number of observations
        actual: usize,
    },

    /// The normal equations could not be solved (collinear regressors)
    #[error("Design matrix is singular")]
    Singular,
}

/// Estimated coefficient for one regressor
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coefficient {
    /// Regressor name (`const` for the intercept)
    pub name: String,
    /// Point estimate
    pub estimate: f64,
    /// Standard error
    pub std_error: f64,
    /// t-statistic (estimate / standard error)
    pub t_statistic: f64,
}

/// Result of an OLS fit
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegressionFit {
    /// Intercept followed by one entry per regressor
    pub coefficients: Vec<Coefficient>,
    /// Number of observations used
    pub observations: usize,
    /// Model degrees of freedom (number of regressors)
    pub df_model: usize,
    /// Residual degrees of freedom (n - p - 1)
    pub df_residual: usize,
    /// Coefficient of determination
    pub r_squared: f64,
    /// R² penalised for the number of regressors
    pub adj_r_squared: f64,
    /// Overall F-statistic
    pub f_statistic: f64,
    /// P(F > f_statistic) under the null of no relationship
    pub f_pvalue: f64,
    /// Residual sum of squares
    pub ssr: f64,
}

impl RegressionFit {
    /// Names of the regressors, intercept excluded
    pub fn regressors(&self) -> Vec<&str> {
        self.coefficients
            .iter()
            .skip(1)
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Intercept estimate
    pub fn intercept(&self) -> f64 {
        self.coefficients.first().map_or(f64::NAN, |c| c.estimate)
    }

    /// Estimated coefficient for a regressor
    pub fn coefficient(&self, name: &str) -> Option<&Coefficient> {
        self.coefficients.iter().skip(1).find(|c| c.name == name)
    }
}
