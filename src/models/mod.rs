//! Data models
//!
//! Typed records for reference rows, submitted meal entries and analysis output.

mod analysis;
mod meal_entry;
mod reference_row;

pub use analysis::{AnalysisResult, FoodCalories, SkippedEntries};
pub use meal_entry::{EntryProblem, MealEntry};
pub use reference_row::{ReferenceRow, RowError};
