//! Pearson Correlation Estimator
//!
//! Computes the sample Pearson correlation for every pair of factors using
//! only the observations where both factors are present (pairwise-complete),
//! which is how `DataFrame.corr()` treats gaps in a combined table whose
//! indicators start and end at different dates.
//!
//! r(i,j) = Σ (x_i - x̄_i)(x_j - x̄_j) / sqrt(Σ (x_i - x̄_i)² · Σ (x_j - x̄_j)²)
//!
//! where the sums and means run over the shared observations of i and j.

use super::{CorrelationError, CorrelationEstimator, CorrelationMatrix};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Pearson estimator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PearsonConfig {
    /// Minimum number of shared observations for a pair (default: 2)
    /// Pairs with fewer get `NaN`
    pub min_periods: usize,
}

impl Default for PearsonConfig {
    fn default() -> Self {
        Self { min_periods: 2 }
    }
}

/// Pairwise-complete Pearson correlation estimator
#[derive(Debug)]
pub struct PearsonEstimator {
    config: PearsonConfig,
}

impl PearsonEstimator {
    /// Create a new estimator with the given configuration
    pub fn new(config: PearsonConfig) -> Result<Self, CorrelationError> {
        if config.min_periods < 2 {
            return Err(CorrelationError::InvalidParameter(format!(
                "min_periods must be at least 2, got {}",
                config.min_periods
            )));
        }
        Ok(Self { config })
    }

    /// Create with default configuration.
    ///
    /// # Errors
    /// Returns an error if the default configuration is invalid (should not happen).
    pub fn try_default() -> Result<Self, CorrelationError> {
        Self::new(PearsonConfig::default())
    }

    /// Current configuration
    pub const fn config(&self) -> &PearsonConfig {
        &self.config
    }

    /// Correlation of two series over their shared finite observations
    ///
    /// Returns `NaN` if fewer than `min_periods` observations are shared or
    /// either series is constant over them.
    pub fn pair(&self, x: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>) -> f64 {
        let pairs: Vec<(f64, f64)> = x
            .iter()
            .zip(y.iter())
            .filter(|(a, b)| a.is_finite() && b.is_finite())
            .map(|(&a, &b)| (a, b))
            .collect();

        if pairs.len() < self.config.min_periods {
            return f64::NAN;
        }

        let n = pairs.len() as f64;
        let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
        let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

        let mut sxy = 0.0;
        let mut sxx = 0.0;
        let mut syy = 0.0;
        for (a, b) in &pairs {
            let dx = a - mean_x;
            let dy = b - mean_y;
            sxy += dx * dy;
            sxx += dx * dx;
            syy += dy * dy;
        }

        if sxx <= 0.0 || syy <= 0.0 {
            return f64::NAN;
        }

        // Rounding can push |r| slightly past 1
        (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
    }
}

impl CorrelationEstimator for PearsonEstimator {
    fn estimate(
        &self,
        names: &[String],
        data: &Array2<f64>,
    ) -> Result<CorrelationMatrix, CorrelationError> {
        let n_factors = data.ncols();
        if names.len() != n_factors {
            return Err(CorrelationError::DimensionMismatch {
                expected: names.len(),
                actual: n_factors,
            });
        }

        let mut corr = Array2::<f64>::eye(n_factors);
        for i in 0..n_factors {
            for j in (i + 1)..n_factors {
                let r = self.pair(data.column(i), data.column(j));
                corr[[i, j]] = r;
                corr[[j, i]] = r;
            }
        }

        CorrelationMatrix::new(names.to_vec(), corr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_config_default() {
        let config = PearsonConfig::default();
        assert_eq!(config.min_periods, 2);
    }

    #[test]
    fn test_invalid_min_periods() {
        let config = PearsonConfig { min_periods: 1 };
        assert!(PearsonEstimator::new(config).is_err());
    }

    #[test]
    fn test_self_and_negated() {
        let estimator = PearsonEstimator::try_default().unwrap();
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let neg = x.mapv(|v| -v);

        assert_relative_eq!(estimator.pair(x.view(), x.view()), 1.0, epsilon = 1e-12);
        assert_relative_eq!(estimator.pair(x.view(), neg.view()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_value() {
        // Hand-computed: r = 0.8
        let estimator = PearsonEstimator::try_default().unwrap();
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let y = array![2.0, 1.0, 4.0, 3.0, 5.0];
        assert_relative_eq!(estimator.pair(x.view(), y.view()), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_pairwise_complete() {
        // The NaN row is ignored for this pair only
        let estimator = PearsonEstimator::try_default().unwrap();
        let x = array![1.0, 2.0, f64::NAN, 4.0];
        let y = array![2.0, 4.0, 100.0, 8.0];
        assert_relative_eq!(estimator.pair(x.view(), y.view()), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_series_is_nan() {
        let estimator = PearsonEstimator::try_default().unwrap();
        let x = array![1.0, 2.0, 3.0];
        let c = Array1::from_elem(3, 7.0);
        assert!(estimator.pair(x.view(), c.view()).is_nan());
    }

    #[test]
    fn test_too_few_observations_is_nan() {
        let estimator = PearsonEstimator::new(PearsonConfig { min_periods: 3 }).unwrap();
        let x = array![1.0, 2.0, f64::NAN];
        let y = array![1.0, 3.0, 5.0];
        assert!(estimator.pair(x.view(), y.view()).is_nan());
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let estimator = PearsonEstimator::try_default().unwrap();
        let data = array![
            [1.0, 10.0, 3.0],
            [2.0, 8.0, 1.0],
            [3.0, 9.0, 4.0],
            [4.0, 5.0, 1.0],
            [5.0, 4.0, 5.0],
        ];
        let m = estimator.estimate(&names(&["A", "B", "C"]), &data).unwrap();

        for a in m.names() {
            assert_eq!(m.get(a, a), Some(1.0));
            for b in m.names() {
                assert_eq!(m.get(a, b), m.get(b, a));
                let r = m.get(a, b).unwrap();
                assert!((-1.0..=1.0).contains(&r));
            }
        }
    }

    #[test]
    fn test_name_mismatch() {
        let estimator = PearsonEstimator::try_default().unwrap();
        let data = Array2::<f64>::zeros((4, 2));
        assert!(matches!(
            estimator.estimate(&names(&["A"]), &data),
            Err(CorrelationError::DimensionMismatch { .. })
        ));
    }
}
