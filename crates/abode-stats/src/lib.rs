#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/abode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod correlation;
pub mod describe;
pub mod distribution;
pub mod regression;

// Re-export main types
pub use correlation::{CorrelationEstimator, CorrelationError, CorrelationMatrix, PearsonEstimator};
pub use describe::{ColumnSummary, describe};
pub use regression::{OlsRegression, RegressionError, RegressionFit};
