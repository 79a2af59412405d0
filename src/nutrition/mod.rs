//! Nutrition calculation module
//!
//! Meal analysis, calorie density statistics and weight conversions.

pub mod analyzer;
pub mod statistics;
pub mod units;

pub use analyzer::{analyze, AnalysisError, TOP_N};
pub use statistics::DescriptiveStats;
pub use units::{grams_per_unit, to_grams};
