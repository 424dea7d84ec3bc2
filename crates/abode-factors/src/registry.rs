//! Indicator Registry
//!
//! Display metadata for the housing-market indicators the combined dataset
//! usually carries. Column ids follow the FRED series ids where one exists.
//! Ranking never depends on the registry; unknown columns are ranked all the
//! same and shown under their raw column id.

use std::collections::HashMap;

/// Column id of the S&P CoreLogic Case-Shiller U.S. National Home Price Index
pub const TARGET_INDEX: &str = "CSUSHPISA";

/// Which side of the housing market an indicator describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    /// The price index the other indicators are ranked against
    Target,
    /// Demand-side drivers (population, employment, income, credit)
    Demand,
    /// Supply-side drivers (new construction, resales, foreclosures)
    Supply,
}

/// Indicator metadata
#[derive(Debug, Clone)]
pub struct IndicatorInfo {
    /// Column id in the combined dataset
    pub column: &'static str,
    /// Short display label
    pub label: &'static str,
    /// Market side
    pub category: IndicatorCategory,
    /// What the series measures
    pub description: &'static str,
}

/// Get all known indicator info
pub fn available_indicators() -> Vec<IndicatorInfo> {
    vec![
        IndicatorInfo {
            column: TARGET_INDEX,
            label: "Home Price Index",
            category: IndicatorCategory::Target,
            description: "S&P CoreLogic Case-Shiller U.S. National Home Price Index",
        },
        // Demand
        IndicatorInfo {
            column: "POPTHM",
            label: "Population",
            category: IndicatorCategory::Demand,
            description: "US resident population (thousands)",
        },
        IndicatorInfo {
            column: "UNRATE",
            label: "Unemployment",
            category: IndicatorCategory::Demand,
            description: "Civilian unemployment rate (percent)",
        },
        IndicatorInfo {
            column: "MEHOINUSA672N",
            label: "Income",
            category: IndicatorCategory::Demand,
            description: "Real median household income",
        },
        IndicatorInfo {
            column: "MORTGAGE30US",
            label: "Mortgage Rate",
            category: IndicatorCategory::Demand,
            description: "30-year fixed rate mortgage average (percent)",
        },
        IndicatorInfo {
            column: "HDTGPDUSQ163N",
            label: "Household Debt",
            category: IndicatorCategory::Demand,
            description: "Household debt relative to GDP (percent)",
        },
        // Supply
        IndicatorInfo {
            column: "PERMIT1",
            label: "Single-Family Permits",
            category: IndicatorCategory::Supply,
            description: "New privately-owned single-family units authorized by permit",
        },
        IndicatorInfo {
            column: "EXHOSLUSM495S",
            label: "Existing Home Sales",
            category: IndicatorCategory::Supply,
            description: "Existing home sales (units)",
        },
        IndicatorInfo {
            column: "FORECLOSURES",
            label: "Foreclosures",
            category: IndicatorCategory::Supply,
            description: "Properties with foreclosure filings",
        },
    ]
}

/// Get indicators by category
pub fn indicators_by_category(category: IndicatorCategory) -> Vec<IndicatorInfo> {
    available_indicators()
        .into_iter()
        .filter(|i| i.category == category)
        .collect()
}

/// Get indicator info by column id
pub fn get_indicator_info(column: &str) -> Option<IndicatorInfo> {
    available_indicators()
        .into_iter()
        .find(|i| i.column == column)
}

/// Display label for a column, falling back to the column id
pub fn display_name(column: &str) -> String {
    get_indicator_info(column).map_or_else(|| column.to_string(), |i| i.label.to_string())
}

/// Get a map of all indicators indexed by column id
pub fn indicator_map() -> HashMap<&'static str, IndicatorInfo> {
    available_indicators()
        .into_iter()
        .map(|i| (i.column, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_indicators() {
        let indicators = available_indicators();
        assert_eq!(indicators.len(), 9);
    }

    #[test]
    fn test_indicators_by_category() {
        assert_eq!(indicators_by_category(IndicatorCategory::Target).len(), 1);
        assert_eq!(indicators_by_category(IndicatorCategory::Demand).len(), 5);
        assert_eq!(indicators_by_category(IndicatorCategory::Supply).len(), 3);
    }

    #[test]
    fn test_get_indicator_info() {
        let info = get_indicator_info("UNRATE").unwrap();
        assert_eq!(info.label, "Unemployment");
        assert_eq!(info.category, IndicatorCategory::Demand);

        assert!(get_indicator_info("nonexistent").is_none());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(TARGET_INDEX), "Home Price Index");
        assert_eq!(display_name("HOUST"), "HOUST");
    }

    #[test]
    fn test_unique_columns() {
        let map = indicator_map();
        assert_eq!(map.len(), available_indicators().len());
    }
}
