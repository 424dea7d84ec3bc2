//! Descriptive statistics per column
//!
//! Mirrors the usual `describe` summary: count, mean, sample standard
//! deviation, min, quartiles and max. Non-finite values are treated as
//! missing and excluded.

use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

/// Summary statistics for a single column
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Number of finite observations
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std: f64,
    /// Minimum
    pub min: f64,
    /// 25th percentile
    pub q25: f64,
    /// Median
    pub median: f64,
    /// 75th percentile
    pub q75: f64,
    /// Maximum
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise one column
    pub fn from_values(name: impl Into<String>, values: ArrayView1<'_, f64>) -> Self {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        if count == 0 {
            return Self {
                name: name.into(),
                count,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let n = count as f64;
        let mean = sorted.iter().sum::<f64>() / n;
        let std = if count > 1 {
            let ss = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (ss / (n - 1.0)).sqrt()
        } else {
            f64::NAN
        };

        Self {
            name: name.into(),
            count,
            mean,
            std,
            min: sorted[0],
            q25: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q75: quantile_sorted(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }
}

/// Summarise every column of `data`
///
/// # Arguments
/// * `names` - Column names, one per column of `data`
/// * `data` - Observations x columns
pub fn describe(names: &[String], data: &Array2<f64>) -> Vec<ColumnSummary> {
    debug_assert_eq!(names.len(), data.ncols(), "one name per column");
    names
        .iter()
        .zip(data.columns())
        .map(|(name, column)| ColumnSummary::from_values(name.as_str(), column))
        .collect()
}

/// Quantile by linear interpolation between closest ranks
///
/// `sorted` must be ascending and non-empty.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_quartiles_interpolate() {
        let s = ColumnSummary::from_values("x", array![4.0, 1.0, 3.0, 2.0].view());
        assert_eq!(s.count, 4);
        assert_relative_eq!(s.mean, 2.5);
        assert_relative_eq!(s.std, 1.2909944487358056, epsilon = 1e-12);
        assert_relative_eq!(s.min, 1.0);
        assert_relative_eq!(s.q25, 1.75);
        assert_relative_eq!(s.median, 2.5);
        assert_relative_eq!(s.q75, 3.25);
        assert_relative_eq!(s.max, 4.0);
    }

    #[test]
    fn test_nan_is_ignored() {
        let s = ColumnSummary::from_values("x", array![1.0, f64::NAN, 3.0].view());
        assert_eq!(s.count, 2);
        assert_relative_eq!(s.mean, 2.0);
        assert_relative_eq!(s.median, 2.0);
    }

    #[test]
    fn test_single_value_has_nan_std() {
        let s = ColumnSummary::from_values("x", array![5.0].view());
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.q25, 5.0);
        assert_eq!(s.q75, 5.0);
    }

    #[test]
    fn test_all_missing() {
        let s = ColumnSummary::from_values("x", array![f64::NAN, f64::NAN].view());
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.max.is_nan());
    }

    #[test]
    fn test_describe_columns() {
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let names = vec!["a".to_string(), "b".to_string()];
        let summaries = describe(&names, &data);

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].name, "b");
        assert_relative_eq!(summaries[1].mean, 20.0);
        assert_relative_eq!(summaries[0].std, 1.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "one name per column")]
    fn test_describe_requires_a_name_per_column() {
        let data = array![[1.0, 10.0], [2.0, 20.0]];
        describe(&["a".to_string()], &data);
    }
}
