//! Housing factor analysis pipeline.
//!
//! [`FactorAnalysis`] ties the member crates together for one dataset and
//! configuration. The correlation matrix is estimated once, when the
//! analysis is created; summaries, the ranking and the regression
//! comparison are derived from the dataset and that matrix on demand.

pub use crate::config::{AnalysisConfig, ConfigError};

use abode_data::{DataError, Dataset};
use abode_factors::{FactorRanking, FactorSelection, RankingError, display_name, rank};
use abode_output::{
    ColumnDescription, CorrelationSummary, DescriptiveTable, ExportError, FactorCorrelation,
    ModelComparison, ModelFit, Report, ReportBuilder, ReportError,
};
use abode_stats::correlation::PearsonConfig;
use abode_stats::{
    ColumnSummary, CorrelationError, CorrelationEstimator, CorrelationMatrix, OlsRegression,
    PearsonEstimator, RegressionError, RegressionFit, describe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised anywhere in the analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Dataset error.
    #[error(transparent)]
    Data(#[from] DataError),

    /// Correlation estimation error.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),

    /// Regression error.
    #[error("Regression failed for {case}: {source}")]
    Regression {
        /// Case being fitted
        case: String,
        /// Underlying error
        source: RegressionError,
    },

    /// Ranking error, e.g. an unknown target.
    #[error(transparent)]
    Ranking(#[from] RankingError),

    /// Export error.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Report error.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// One regression of the comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonCase {
    /// Selection that produced the regressors
    pub selection: FactorSelection,
    /// Human readable label
    pub label: String,
    /// Regressors, in rank order
    pub factors: Vec<String>,
    /// Fit of the target on `factors`
    pub fit: RegressionFit,
}

impl ComparisonCase {
    /// Output row for this case.
    pub fn to_model_fit(&self) -> ModelFit {
        ModelFit::new(
            self.label.clone(),
            self.factors.clone(),
            self.fit.observations,
            self.fit.r_squared,
            self.fit.adj_r_squared,
            self.fit.f_statistic,
            self.fit.f_pvalue,
        )
    }
}

/// Pipeline over one dataset.
#[derive(Debug)]
pub struct FactorAnalysis<'a> {
    dataset: &'a Dataset,
    config: AnalysisConfig,
    correlation: CorrelationMatrix,
}

impl<'a> FactorAnalysis<'a> {
    /// Validate the configuration and estimate the correlation matrix.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the dataset's
    /// numeric columns cannot be extracted.
    pub fn new(dataset: &'a Dataset, config: AnalysisConfig) -> Result<Self> {
        config.validate()?;

        let estimator = PearsonEstimator::new(PearsonConfig {
            min_periods: config.min_periods,
        })?;
        let names = dataset.column_names().to_vec();
        let data = dataset.numeric_matrix()?;
        let correlation = estimator.estimate(&names, &data)?;

        info!(
            source = dataset.source(),
            rows = dataset.height(),
            factors = correlation.len(),
            "estimated correlation matrix"
        );

        Ok(Self {
            dataset,
            config,
            correlation,
        })
    }

    /// Configuration in use.
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Dataset under analysis.
    pub const fn dataset(&self) -> &Dataset {
        self.dataset
    }

    /// Pearson correlation of every pair of numeric columns.
    pub const fn correlation(&self) -> &CorrelationMatrix {
        &self.correlation
    }

    /// Descriptive statistics of every numeric column.
    pub fn summaries(&self) -> Result<Vec<ColumnSummary>> {
        let data = self.dataset.numeric_matrix()?;
        Ok(describe(self.dataset.column_names(), &data))
    }

    /// Indicators ranked by absolute correlation with the target.
    ///
    /// # Errors
    /// Returns [`RankingError::UnknownFactor`] if the target is not a numeric
    /// column of the dataset.
    pub fn ranking(&self) -> Result<FactorRanking> {
        let ranking = rank(&self.correlation, &self.config.target)?;
        debug!(
            target_column = %self.config.target,
            ranked = ranking.len(),
            strongest = ranking.first().map(|e| e.name.as_str()),
            "ranked factors"
        );
        Ok(ranking)
    }

    /// Regress the target on each configured selection.
    ///
    /// Factors whose correlation with the target is undefined (too few
    /// shared observations, or no variance) are left out of every case.
    pub fn compare(&self) -> Result<Vec<ComparisonCase>> {
        let ranking = self.ranking()?;
        self.compare_with(&ranking)
    }

    fn compare_with(&self, ranking: &FactorRanking) -> Result<Vec<ComparisonCase>> {
        let ols = OlsRegression::new();

        self.config
            .cases
            .iter()
            .map(|selection| -> Result<ComparisonCase> {
                let label = selection.label();
                let (factors, skipped): (Vec<String>, Vec<String>) = selection
                    .resolve(ranking)
                    .into_iter()
                    .partition(|name| has_finite_correlation(ranking, name));
                if !skipped.is_empty() {
                    warn!(
                        case = %label,
                        skipped = ?skipped,
                        "leaving out factors without a defined correlation"
                    );
                }
                let (y, x) = self.dataset.complete_rows(&self.config.target, factors.as_slice())?;

                let fit = ols
                    .fit(&y, &x, factors.as_slice())
                    .map_err(|source| AnalysisError::Regression {
                        case: label.clone(),
                        source,
                    })?;

                info!(
                    case = %label,
                    regressors = factors.len(),
                    observations = fit.observations,
                    r_squared = fit.r_squared,
                    adj_r_squared = fit.adj_r_squared,
                    "fitted comparison case"
                );

                Ok(ComparisonCase {
                    selection: *selection,
                    label,
                    factors,
                    fit,
                })
            })
            .collect()
    }

    /// Run every step.
    pub fn run(&self) -> Result<AnalysisOutcome> {
        let summaries = self.summaries()?;
        let ranking = self.ranking()?;
        let cases = self.compare_with(&ranking)?;

        Ok(AnalysisOutcome {
            dataset: self.dataset.source().to_string(),
            observations: self.dataset.height(),
            target: self.config.target.clone(),
            summaries,
            ranking,
            cases,
        })
    }
}

fn has_finite_correlation(ranking: &FactorRanking, name: &str) -> bool {
    ranking
        .iter()
        .any(|e| e.name == name && e.abs_correlation.is_finite())
}

/// Everything one analysis run produces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisOutcome {
    /// Dataset name
    pub dataset: String,
    /// Rows in the dataset
    pub observations: usize,
    /// Target column
    pub target: String,
    /// Per-column descriptive statistics
    pub summaries: Vec<ColumnSummary>,
    /// Factors ranked against the target
    pub ranking: FactorRanking,
    /// Regression comparison cases
    pub cases: Vec<ComparisonCase>,
}

impl AnalysisOutcome {
    /// Signed correlations in ranking order.
    pub fn correlation_summary(&self) -> CorrelationSummary {
        correlation_summary(&self.ranking)
    }

    /// Side-by-side regression comparison.
    pub fn model_comparison(&self) -> ModelComparison {
        model_comparison(&self.target, &self.cases)
    }

    /// Descriptive statistics table.
    pub fn descriptive_table(&self) -> DescriptiveTable {
        descriptive_table(&self.dataset, self.observations, &self.summaries)
    }

    /// Bundle the outcome into one JSON report.
    pub fn report(&self) -> Result<Report> {
        let report = ReportBuilder::new()
            .dataset(self.dataset.as_str())
            .target(self.target.as_str())
            .section("summary", &self.descriptive_table())?
            .section("correlations", &self.correlation_summary())?
            .section("ranking", &self.ranking)?
            .section("comparison", &self.model_comparison())?
            .section("coefficients", &self.cases)?
            .build()?;
        Ok(report)
    }
}

/// Correlation table rows for a ranking, labelled from the indicator registry.
pub fn correlation_summary(ranking: &FactorRanking) -> CorrelationSummary {
    let factors = ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            FactorCorrelation::new(
                entry.name.clone(),
                display_name(&entry.name),
                entry.correlation,
                i + 1,
            )
        })
        .collect();
    CorrelationSummary::new(ranking.target().to_string(), factors)
}

/// Comparison table for a set of fitted cases.
pub fn model_comparison(target: &str, cases: &[ComparisonCase]) -> ModelComparison {
    ModelComparison::new(
        target.to_string(),
        cases.iter().map(ComparisonCase::to_model_fit).collect(),
    )
}

/// Descriptive table for a set of column summaries.
pub fn descriptive_table(
    dataset: &str,
    observations: usize,
    summaries: &[ColumnSummary],
) -> DescriptiveTable {
    let columns = summaries
        .iter()
        .map(|s| ColumnDescription {
            name: s.name.clone(),
            count: s.count,
            mean: s.mean,
            std: s.std,
            min: s.min,
            q25: s.q25,
            median: s.median,
            q75: s.q75,
            max: s.max,
        })
        .collect();
    DescriptiveTable::new(dataset.to_string(), observations, columns)
}
