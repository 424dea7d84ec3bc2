//! Factor selections for regression comparison
//!
//! A selection picks which ranked factors enter a regression: all of them,
//! or only the strongest `k`.

use crate::ranking::FactorRanking;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a [`FactorSelection`]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid factor selection '{0}': expected 'all', 0 (all) or a positive count")]
pub struct SelectionParseError(pub String);

/// Which ranked factors a comparison case uses
///
/// A count of zero means every factor, whether it comes from the command
/// line or from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "SelectionRepr")]
pub enum FactorSelection {
    /// Every ranked factor
    All,
    /// The `k` most correlated factors
    Top(usize),
}

/// Serialized form, before `{"top": 0}` is folded into `All`
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum SelectionRepr {
    All,
    Top(usize),
}

impl From<SelectionRepr> for FactorSelection {
    fn from(repr: SelectionRepr) -> Self {
        match repr {
            SelectionRepr::All | SelectionRepr::Top(0) => Self::All,
            SelectionRepr::Top(k) => Self::Top(k),
        }
    }
}

impl FactorSelection {
    /// Cases compared by the housing report: every factor, top five, top one
    pub const fn default_cases() -> [Self; 3] {
        [Self::All, Self::Top(5), Self::Top(1)]
    }

    /// Selected factor names, in rank order
    pub fn resolve(&self, ranking: &FactorRanking) -> Vec<String> {
        let take = match self {
            Self::All => ranking.len(),
            Self::Top(k) => *k,
        };
        ranking
            .iter()
            .take(take)
            .map(|e| e.name.clone())
            .collect()
    }

    /// Human readable description
    pub fn label(&self) -> String {
        match self {
            Self::All => "all factors".to_string(),
            Self::Top(1) => "top 1 factor".to_string(),
            Self::Top(k) => format!("top {} factors", k),
        }
    }
}

impl fmt::Display for FactorSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Top(k) => write!(f, "{}", k),
        }
    }
}

impl FromStr for FactorSelection {
    type Err = SelectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Ok(Self::All),
            Ok(k) => Ok(Self::Top(k)),
            Err(_) => Err(SelectionParseError(s.to_string())),
        }
    }
}
