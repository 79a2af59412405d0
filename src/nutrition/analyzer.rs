//! Meal analysis
//!
//! Totals the calories of a meal and summarizes the calorie density of the
//! distinct foods it contains.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{
    AnalysisResult, EntryProblem, FoodCalories, MealEntry, ReferenceRow, SkippedEntries,
};
use crate::table::CalorieLookup;
use super::statistics::DescriptiveStats;

/// Number of foods reported in the highest/lowest lists
pub const TOP_N: usize = 5;

/// Analysis error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The reference table is empty, usually because loading failed
    #[error("Calorie data not loaded.")]
    DataUnavailable,
}

/// Analyze a meal against a reference table
///
/// Entries are processed in order. Entries with no name, a missing or
/// non-positive quantity, an unknown unit, or calories that would push the
/// total past the f64 range are skipped as malformed;
/// names not found in the table are skipped as unmatched. Neither is an
/// error. Statistics cover the table rows of the distinct matched foods,
/// taken in table order.
pub fn analyze<T>(table: &T, entries: &[MealEntry]) -> Result<AnalysisResult, AnalysisError>
where
    T: CalorieLookup + ?Sized,
{
    if table.is_empty() {
        return Err(AnalysisError::DataUnavailable);
    }

    let mut total_calories = 0.0;
    let mut skipped = SkippedEntries::default();
    let mut matched_keys: HashSet<String> = HashSet::new();
    let mut distinct_matched_foods = Vec::new();

    for (position, entry) in entries.iter().enumerate() {
        let (name, grams) = match entry.validate() {
            Ok(valid) => valid,
            Err(problem) => {
                tracing::warn!(
                    "Skipping meal item {}: {} ({:?})",
                    position + 1,
                    problem.as_str(),
                    entry
                );
                skipped.malformed += 1;
                continue;
            }
        };

        let Some(row) = table.lookup_case_insensitive(name) else {
            tracing::warn!("Food item '{}' not found in calorie data", name);
            skipped.unmatched += 1;
            continue;
        };

        let calories = grams * row.calories_per_gram();
        let running_total = total_calories + calories;
        if !running_total.is_finite() {
            tracing::warn!(
                "Skipping meal item {}: {} ({:?})",
                position + 1,
                EntryProblem::CalorieOverflow.as_str(),
                entry
            );
            skipped.malformed += 1;
            continue;
        }
        total_calories = running_total;
        tracing::debug!("Processed: {} ({}g)", row.food_name(), grams);

        if matched_keys.insert(row.lookup_key()) {
            distinct_matched_foods.push(row.food_name().to_string());
        }
    }

    let selected: Vec<&ReferenceRow> = table
        .all_rows()
        .iter()
        .filter(|row| matched_keys.contains(&row.lookup_key()))
        .collect();

    let mut result = summarize(&selected);
    result.total_calories = total_calories;
    result.distinct_matched_foods = distinct_matched_foods;
    result.skipped = skipped;

    if skipped.total() > 0 {
        tracing::info!(
            "Meal analysis skipped {} item(s): {} malformed, {} unmatched",
            skipped.total(),
            skipped.malformed,
            skipped.unmatched
        );
    }

    Ok(result)
}

/// Statistics over the selected rows; defaults when nothing was selected
fn summarize(selected: &[&ReferenceRow]) -> AnalysisResult {
    let values: Vec<f64> = selected.iter().map(|row| row.calories_per_100g()).collect();

    let Some(stats) = DescriptiveStats::from_values(&values) else {
        return AnalysisResult::empty();
    };
    tracing::debug!("Summarized calorie density of {} distinct food(s)", stats.count);

    AnalysisResult {
        sum_calories_per_100g: stats.sum,
        average_calories_per_100g: Some(stats.mean),
        median_calories_per_100g: Some(stats.median),
        min_calories_per_100g: Some(stats.min),
        max_calories_per_100g: Some(stats.max),
        std_deviation_calories_per_100g: stats.std_dev,
        highest_calorie_foods: ranked(selected, true),
        lowest_calorie_foods: ranked(selected, false),
        ..AnalysisResult::empty()
    }
}

/// Up to [`TOP_N`] rows ordered by calorie density; ties keep table order
fn ranked(selected: &[&ReferenceRow], descending: bool) -> Vec<FoodCalories> {
    let mut rows = selected.to_vec();
    // sort_by is stable
    if descending {
        rows.sort_by(|a, b| b.calories_per_100g().total_cmp(&a.calories_per_100g()));
    } else {
        rows.sort_by(|a, b| a.calories_per_100g().total_cmp(&b.calories_per_100g()));
    }

    rows.into_iter()
        .take(TOP_N)
        .map(|row| FoodCalories {
            food_item: row.food_name().to_string(),
            calories_per_100g: row.calories_per_100g(),
        })
        .collect()
}
