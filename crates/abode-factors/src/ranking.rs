//! Factor Ranker
//!
//! Orders the factors of a correlation matrix by the strength of their
//! linear relationship with a target factor. Strength is the absolute value
//! of the Pearson coefficient; the sign is kept alongside for display.
//!
//! Ordering rules:
//! - larger absolute correlation first
//! - equal absolute correlations by factor name, ascending
//! - `NaN` coefficients after every finite one
//!
//! The target's own entry is never part of a ranking.

use abode_stats::CorrelationMatrix;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Ranking errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RankingError {
    /// The target is not one of the matrix factors
    #[error("Unknown factor: {0}")]
    UnknownFactor(String),
}

/// One factor's position in a ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedFactor {
    /// Factor name
    pub name: String,
    /// Signed correlation with the target
    pub correlation: f64,
    /// Absolute correlation, the ranking key
    pub abs_correlation: f64,
}

impl RankedFactor {
    /// Create an entry from a signed coefficient
    pub fn new(name: impl Into<String>, correlation: f64) -> Self {
        Self {
            name: name.into(),
            correlation,
            abs_correlation: correlation.abs(),
        }
    }

    /// `(name, absolute correlation)` view of the entry
    pub fn as_pair(&self) -> (&str, f64) {
        (&self.name, self.abs_correlation)
    }
}

/// Factors ordered by absolute correlation with a target, strongest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorRanking {
    target: String,
    entries: Vec<RankedFactor>,
}

impl FactorRanking {
    /// Factor the ranking was computed against
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Ranked entries, strongest first
    pub fn entries(&self) -> &[RankedFactor] {
        &self.entries
    }

    /// Iterate over entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, RankedFactor> {
        self.entries.iter()
    }

    /// Number of ranked factors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no factor is ranked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Factor names in rank order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// `(name, absolute correlation)` pairs in rank order
    pub fn pairs(&self) -> Vec<(&str, f64)> {
        self.entries.iter().map(RankedFactor::as_pair).collect()
    }

    /// Strongest factor, if any
    pub fn first(&self) -> Option<&RankedFactor> {
        self.entries.first()
    }

    /// 1-based rank of a factor
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name).map(|i| i + 1)
    }

    /// First `k` entries, order preserved
    ///
    /// `k` larger than the ranking returns the whole ranking.
    pub fn top_k(&self, k: usize) -> Self {
        Self {
            target: self.target.clone(),
            entries: self.entries.iter().take(k).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FactorRanking {
    type Item = &'a RankedFactor;
    type IntoIter = std::slice::Iter<'a, RankedFactor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Rank every other factor of `matrix` by absolute correlation with `target`
///
/// # Errors
/// Returns [`RankingError::UnknownFactor`] if `target` is not in the matrix.
pub fn rank(matrix: &CorrelationMatrix, target: &str) -> Result<FactorRanking, RankingError> {
    let row = matrix
        .row(target)
        .ok_or_else(|| RankingError::UnknownFactor(target.to_string()))?;

    let mut entries: Vec<RankedFactor> = row
        .into_iter()
        .filter(|(name, _)| *name != target)
        .map(|(name, r)| RankedFactor::new(name, r))
        .collect();
    entries.sort_by(ranking_order);

    Ok(FactorRanking {
        target: target.to_string(),
        entries,
    })
}

/// First `k` entries of `ranking`
pub fn top_k(ranking: &FactorRanking, k: usize) -> FactorRanking {
    ranking.top_k(k)
}

fn ranking_order(a: &RankedFactor, b: &RankedFactor) -> Ordering {
    match (a.abs_correlation.is_nan(), b.abs_correlation.is_nan()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => a.name.cmp(&b.name),
        (false, false) => b
            .abs_correlation
            .total_cmp(&a.abs_correlation)
            .then_with(|| a.name.cmp(&b.name)),
    }
}
