//! Ordinary Least Squares
//!
//! Fits y = β₀ + Xβ + ε by solving the normal equations:
//! β̂ = (XᵀX)⁻¹ Xᵀy
//!
//! Fit statistics:
//! - R² = 1 - SSR / SST
//! - adjusted R² = 1 - (1 - R²)(n - 1) / (n - p - 1)
//! - F = ((SST - SSR) / p) / (SSR / (n - p - 1))
//!
//! where n is the number of observations and p the number of regressors.

use super::linalg::invert;
use super::{Coefficient, RegressionError, RegressionFit};
use crate::distribution::f_survival;
use ndarray::{Array1, Array2, s};

/// Name given to the intercept coefficient
pub const INTERCEPT: &str = "const";

/// Relative residual sum of squares treated as an exact fit
const PERFECT_FIT_TOLERANCE: f64 = 1e-20;

/// OLS estimator with an intercept
#[derive(Debug, Default, Clone, Copy)]
pub struct OlsRegression;

impl OlsRegression {
    /// Create a new estimator
    pub const fn new() -> Self {
        Self
    }

    /// Fit the regression
    ///
    /// # Arguments
    /// * `y` - Response (n)
    /// * `x` - Regressors (n x p), without an intercept column
    /// * `names` - Regressor names (p)
    ///
    /// All values must be finite; filter incomplete rows beforehand.
    pub fn fit<S: AsRef<str>>(
        &self,
        y: &Array1<f64>,
        x: &Array2<f64>,
        names: &[S],
    ) -> Result<RegressionFit, RegressionError> {
        let (n, p) = x.dim();

        if p == 0 {
            return Err(RegressionError::EmptyDesign);
        }
        if y.len() != n {
            return Err(RegressionError::DimensionMismatch(format!(
                "response has {} observations, regressors have {}",
                y.len(),
                n
            )));
        }
        if names.len() != p {
            return Err(RegressionError::DimensionMismatch(format!(
                "{} names for {} regressors",
                names.len(),
                p
            )));
        }
        if n < p + 2 {
            return Err(RegressionError::InsufficientData {
                required: p + 2,
                actual: n,
            });
        }

        // Design matrix with a leading column of ones
        let mut design = Array2::<f64>::ones((n, p + 1));
        design.slice_mut(s![.., 1..]).assign(x);

        let xtx = design.t().dot(&design);
        let xtx_inv = invert(&xtx)?;
        let beta = xtx_inv.dot(&design.t().dot(y));

        let fitted = design.dot(&beta);
        let residuals = y - &fitted;
        let ssr = residuals.dot(&residuals);

        let mean_y = y.mean().unwrap_or(0.0);
        let sst = y.iter().map(|v| (v - mean_y).powi(2)).sum::<f64>();

        let df_model = p;
        let df_residual = n - p - 1;

        let r_squared = if sst > 0.0 { 1.0 - ssr / sst } else { f64::NAN };
        let adj_r_squared =
            1.0 - (1.0 - r_squared) * (n - 1) as f64 / df_residual as f64;

        // Residuals at rounding level count as a perfect fit
        let f_statistic = if sst <= 0.0 {
            f64::NAN
        } else if ssr <= PERFECT_FIT_TOLERANCE * sst {
            f64::INFINITY
        } else {
            ((sst - ssr) / df_model as f64) / (ssr / df_residual as f64)
        };
        let f_pvalue = f_survival(f_statistic, df_model as f64, df_residual as f64);

        // Coefficient standard errors from σ̂²(XᵀX)⁻¹
        let sigma2 = ssr / df_residual as f64;
        let coefficients = std::iter::once(INTERCEPT.to_string())
            .chain(names.iter().map(|name| name.as_ref().to_string()))
            .enumerate()
            .map(|(i, name)| {
                let std_error = (sigma2 * xtx_inv[[i, i]]).max(0.0).sqrt();
                Coefficient {
                    name,
                    estimate: beta[i],
                    std_error,
                    t_statistic: beta[i] / std_error,
                }
            })
            .collect();

        Ok(RegressionFit {
            coefficients,
            observations: n,
            df_model,
            df_residual,
            r_squared,
            adj_r_squared,
            f_statistic,
            f_pvalue,
            ssr,
        })
    }
}
