//! Correlation and descriptive summaries.
//!
//! [`CorrelationSummary`] lists every factor's signed correlation with the
//! target in ranking order. [`DescriptiveTable`] holds one
//! [`ColumnDescription`] per numeric column of the dataset.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One factor's correlation with the target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorCorrelation {
    /// Column id of the factor.
    pub factor_name: String,

    /// Display label.
    pub label: String,

    /// Signed Pearson coefficient.
    pub correlation: f64,

    /// Absolute coefficient, the ranking key.
    pub abs_correlation: f64,

    /// 1-based rank.
    pub rank: usize,
}

impl FactorCorrelation {
    /// Create a new factor correlation row.
    ///
    /// # Examples
    ///
    /// ```
    /// use abode_output::FactorCorrelation;
    ///
    /// let row = FactorCorrelation::new(
    ///     "UNRATE".to_string(),
    ///     "Unemployment".to_string(),
    ///     -0.42,
    ///     3,
    /// );
    ///
    /// assert_eq!(row.abs_correlation, 0.42);
    /// ```
    pub fn new(factor_name: String, label: String, correlation: f64, rank: usize) -> Self {
        Self {
            factor_name,
            label,
            correlation,
            abs_correlation: correlation.abs(),
            rank,
        }
    }

    /// Direction of the relationship.
    pub fn direction(&self) -> &'static str {
        if self.correlation.is_nan() {
            "undefined"
        } else if self.correlation >= 0.0 {
            "positive"
        } else {
            "negative"
        }
    }
}

impl fmt::Display for FactorCorrelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({}): {:+.4}",
            self.rank, self.label, self.factor_name, self.correlation
        )
    }
}

/// Correlations of every factor with one target, strongest first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorrelationSummary {
    /// Target column id.
    pub target: String,

    /// Rows in ranking order.
    pub factors: Vec<FactorCorrelation>,
}

impl CorrelationSummary {
    /// Create a correlation summary.
    pub const fn new(target: String, factors: Vec<FactorCorrelation>) -> Self {
        Self { target, factors }
    }

    /// Number of factors.
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    /// Whether the summary has no factors.
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Strongest factor.
    pub fn strongest(&self) -> Option<&FactorCorrelation> {
        self.factors.first()
    }

    /// Format as ASCII table for terminal display, showing at most `limit` rows.
    pub fn to_ascii_table(&self, limit: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("\nCorrelation with {}\n", self.target));
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:>4}  {:<16} {:<24} {:>12} {:>12}\n",
            "Rank", "Factor", "Label", "Corr.", "|Corr.|"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in self.factors.iter().take(limit) {
            output.push_str(&format!(
                "{:>4}  {:<16} {:<24} {:>12.4} {:>12.4}\n",
                row.rank, row.factor_name, row.label, row.correlation, row.abs_correlation
            ));
        }

        if self.factors.len() > limit {
            output.push_str(&format!(
                "... {} more factor(s)\n",
                self.factors.len() - limit
            ));
        }

        output.push_str(&"=".repeat(72));
        output.push('\n');

        output
    }

    /// Format as Markdown table, showing at most `limit` rows.
    pub fn to_markdown(&self, limit: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Correlation with {}\n\n", self.target));
        output.push_str("| Rank | Factor | Label | Correlation | Absolute |\n");
        output.push_str("|------|--------|-------|-------------|----------|\n");

        for row in self.factors.iter().take(limit) {
            output.push_str(&format!(
                "| {} | {} | {} | {:.4} | {:.4} |\n",
                row.rank, row.factor_name, row.label, row.correlation, row.abs_correlation
            ));
        }

        output
    }
}

impl fmt::Display for CorrelationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Correlation with {}:", self.target)?;
        for row in &self.factors {
            writeln!(f, "  {} [{}]", row, row.direction())?;
        }
        Ok(())
    }
}

/// Descriptive statistics of one column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnDescription {
    /// Column id.
    pub name: String,

    /// Number of finite values.
    pub count: usize,

    /// Mean.
    pub mean: f64,

    /// Sample standard deviation.
    pub std: f64,

    /// Minimum.
    pub min: f64,

    /// 25th percentile.
    pub q25: f64,

    /// Median.
    pub median: f64,

    /// 75th percentile.
    pub q75: f64,

    /// Maximum.
    pub max: f64,
}

/// Descriptive statistics of a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DescriptiveTable {
    /// Dataset name, usually the source file.
    pub dataset: String,

    /// Rows in the dataset.
    pub observations: usize,

    /// One entry per numeric column.
    pub columns: Vec<ColumnDescription>,
}

impl DescriptiveTable {
    /// Create a descriptive table.
    pub const fn new(dataset: String, observations: usize, columns: Vec<ColumnDescription>) -> Self {
        Self {
            dataset,
            observations,
            columns,
        }
    }

    /// Look up a column.
    pub fn column(&self, name: &str) -> Option<&ColumnDescription> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Format as ASCII table for terminal display.
    pub fn to_ascii_table(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\nDataset: {} ({} rows)\n",
            self.dataset, self.observations
        ));
        output.push_str(&"=".repeat(124));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
            "Column", "Count", "Mean", "Std", "Min", "25%", "50%", "75%", "Max"
        ));
        output.push_str(&"-".repeat(124));
        output.push('\n');

        for c in &self.columns {
            output.push_str(&format!(
                "{:<16} {:>6} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12.4}\n",
                c.name, c.count, c.mean, c.std, c.min, c.q25, c.median, c.q75, c.max
            ));
        }

        output.push_str(&"=".repeat(124));
        output.push('\n');

        output
    }

    /// Format as Markdown table.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("# Dataset: {}\n\n", self.dataset));
        output.push_str(&format!("**Observations:** {}\n\n", self.observations));
        output.push_str("| Column | Count | Mean | Std | Min | 25% | 50% | 75% | Max |\n");
        output.push_str("|--------|-------|------|-----|-----|-----|-----|-----|-----|\n");

        for c in &self.columns {
            output.push_str(&format!(
                "| {} | {} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} | {:.4} |\n",
                c.name, c.count, c.mean, c.std, c.min, c.q25, c.median, c.q75, c.max
            ));
        }

        output
    }
}

impl fmt::Display for DescriptiveTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} rows, {} numeric columns",
            self.dataset,
            self.observations,
            self.columns.len()
        )?;
        for c in &self.columns {
            writeln!(
                f,
                "  {}: mean {:.4}, std {:.4}, range [{:.4}, {:.4}]",
                c.name, c.mean, c.std, c.min, c.max
            )?;
        }
        Ok(())
    }
}
