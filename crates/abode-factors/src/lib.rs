#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/abode/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ranking;
pub mod registry;
pub mod selection;

pub use ranking::{FactorRanking, RankedFactor, RankingError, rank, top_k};
pub use selection::{FactorSelection, SelectionParseError};

// Re-export registry types for convenience
pub use registry::{
    IndicatorCategory, IndicatorInfo, TARGET_INDEX, available_indicators, display_name,
    get_indicator_info, indicator_map, indicators_by_category,
};
