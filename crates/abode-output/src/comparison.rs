//! Regression model comparison.
//!
//! Each [`ModelFit`] is one case of the comparison: the index regressed on a
//! particular selection of factors. [`ModelComparison`] lines the cases up so
//! the fit statistics can be read side by side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fit statistics for one comparison case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelFit {
    /// Case label, e.g. "top 5 factors".
    pub label: String,

    /// Regressors used, in rank order.
    pub factors: Vec<String>,

    /// Observations used in the fit.
    pub observations: usize,

    /// Coefficient of determination.
    pub r_squared: f64,

    /// R-squared adjusted for the number of regressors.
    pub adj_r_squared: f64,

    /// Overall F-statistic.
    pub f_statistic: f64,

    /// Probability of the F-statistic under the null.
    pub f_pvalue: f64,
}

impl ModelFit {
    /// Create a new model fit row.
    ///
    /// # Examples
    ///
    /// ```
    /// use abode_output::ModelFit;
    ///
    /// let fit = ModelFit::new(
    ///     "top 1 factor".to_string(),
    ///     vec!["POPTHM".to_string()],
    ///     84,
    ///     0.87,
    ///     0.868,
    ///     548.6,
    ///     1.2e-38,
    /// );
    ///
    /// assert_eq!(fit.factor_count(), 1);
    /// ```
    pub const fn new(
        label: String,
        factors: Vec<String>,
        observations: usize,
        r_squared: f64,
        adj_r_squared: f64,
        f_statistic: f64,
        f_pvalue: f64,
    ) -> Self {
        Self {
            label,
            factors,
            observations,
            r_squared,
            adj_r_squared,
            f_statistic,
            f_pvalue,
        }
    }

    /// Number of regressors.
    pub fn factor_count(&self) -> usize {
        self.factors.len()
    }
}

impl fmt::Display for ModelFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: R² {:.4}, adj. R² {:.4}, F {:.2} (p = {:.3e}, n = {})",
            self.label,
            self.r_squared,
            self.adj_r_squared,
            self.f_statistic,
            self.f_pvalue,
            self.observations
        )
    }
}

/// Side-by-side comparison of regression cases for one target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelComparison {
    /// Dependent variable.
    pub target: String,

    /// One row per case, in the order the cases were run.
    pub fits: Vec<ModelFit>,
}

impl ModelComparison {
    /// Create a comparison.
    pub const fn new(target: String, fits: Vec<ModelFit>) -> Self {
        Self { target, fits }
    }

    /// Case with the highest adjusted R-squared.
    pub fn best_by_adj_r_squared(&self) -> Option<&ModelFit> {
        self.fits
            .iter()
            .filter(|fit| !fit.adj_r_squared.is_nan())
            .max_by(|a, b| a.adj_r_squared.total_cmp(&b.adj_r_squared))
    }

    /// Case with the smallest F-statistic probability.
    pub fn lowest_f_pvalue(&self) -> Option<&ModelFit> {
        self.fits
            .iter()
            .filter(|fit| !fit.f_pvalue.is_nan())
            .min_by(|a, b| a.f_pvalue.total_cmp(&b.f_pvalue))
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&"=".repeat(88));
        output.push('\n');
        output.push_str(&format!("Regression Comparison: {}\n", self.target));
        output.push_str(&"=".repeat(88));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>8} {:>6} {:>12} {:>12} {:>12} {:>12}\n",
            "Case", "Factors", "Obs", "R-squared", "Adj. R-sq", "F-stat", "Prob (F)"
        ));
        output.push_str(&"-".repeat(88));
        output.push('\n');

        for fit in &self.fits {
            output.push_str(&format!(
                "{:<20} {:>8} {:>6} {:>12.4} {:>12.4} {:>12.2} {:>12.3e}\n",
                fit.label,
                fit.factor_count(),
                fit.observations,
                fit.r_squared,
                fit.adj_r_squared,
                fit.f_statistic,
                fit.f_pvalue
            ));
        }

        output.push_str(&"-".repeat(88));
        output.push('\n');

        for fit in &self.fits {
            output.push_str(&format!("{}: {}\n", fit.label, fit.factors.join(", ")));
        }

        if let Some(best) = self.best_by_adj_r_squared() {
            output.push_str(&format!("\nHighest adjusted R-squared: {}\n", best.label));
        }
        if let Some(best) = self.lowest_f_pvalue() {
            output.push_str(&format!("Lowest Prob (F-statistic):  {}\n", best.label));
        }

        output
    }

    /// Format as Markdown table for documentation.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Regression Comparison: {}\n\n", self.target));
        output.push_str(
            "| Case | Factors | Obs | R-squared | Adj. R-squared | F-statistic | Prob (F-statistic) |\n",
        );
        output.push_str(
            "|------|---------|-----|-----------|----------------|-------------|--------------------|\n",
        );

        for fit in &self.fits {
            output.push_str(&format!(
                "| {} | {} | {} | {:.4} | {:.4} | {:.2} | {:.3e} |\n",
                fit.label,
                fit.factors.join(", "),
                fit.observations,
                fit.r_squared,
                fit.adj_r_squared,
                fit.f_statistic,
                fit.f_pvalue
            ));
        }

        output
    }
}

impl fmt::Display for ModelComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Regression comparison for {}:", self.target)?;
        for fit in &self.fits {
            writeln!(f, "  {}", fit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison() -> ModelComparison {
        ModelComparison::new(
            "CSUSHPISA".to_string(),
            vec![
                ModelFit::new(
                    "all factors".to_string(),
                    vec!["POPTHM".into(), "UNRATE".into(), "PERMIT1".into()],
                    80,
                    0.95,
                    0.948,
                    480.0,
                    1e-45,
                ),
                ModelFit::new(
                    "top 1 factor".to_string(),
                    vec!["POPTHM".into()],
                    84,
                    0.90,
                    0.899,
                    740.0,
                    1e-44,
                ),
            ],
        )
    }

    #[test]
    fn test_best_cases() {
        let c = comparison();
        assert_eq!(c.best_by_adj_r_squared().unwrap().label, "all factors");
        assert_eq!(c.lowest_f_pvalue().unwrap().label, "all factors");
    }

    #[test]
    fn test_best_ignores_nan() {
        let mut c = comparison();
        c.fits[0].adj_r_squared = f64::NAN;
        assert_eq!(c.best_by_adj_r_squared().unwrap().label, "top 1 factor");
    }

    #[test]
    fn test_empty_comparison() {
        let c = ModelComparison::new("CSUSHPISA".to_string(), vec![]);
        assert!(c.best_by_adj_r_squared().is_none());
        assert!(c.lowest_f_pvalue().is_none());
    }

    #[test]
    fn test_ascii_table() {
        let table = comparison().to_ascii_table();
        assert!(table.contains("Regression Comparison: CSUSHPISA"));
        assert!(table.contains("all factors"));
        assert!(table.contains("0.9480"));
        assert!(table.contains("POPTHM, UNRATE, PERMIT1"));
        assert!(table.contains("Highest adjusted R-squared: all factors"));
    }

    #[test]
    fn test_markdown() {
        let md = comparison().to_markdown();
        assert!(md.starts_with("# Regression Comparison: CSUSHPISA"));
        assert!(md.contains("| top 1 factor | POPTHM | 84 |"));
    }

    #[test]
    fn test_display() {
        let text = comparison().to_string();
        assert!(text.contains("top 1 factor: R² 0.9000"));
    }
}
