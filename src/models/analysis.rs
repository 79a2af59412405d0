//! Analysis result model
//!
//! What an analysis of one meal produces.

use serde::Serialize;

/// A food paired with its calorie density
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodCalories {
    pub food_item: String,
    pub calories_per_100g: f64,
}

/// Entries dropped during an analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkippedEntries {
    /// Missing name, missing or non-positive quantity, unknown unit
    pub malformed: usize,
    /// Name not in the reference table
    pub unmatched: usize,
}

impl SkippedEntries {
    pub fn total(&self) -> usize {
        self.malformed + self.unmatched
    }
}

/// Calories for a meal plus statistics over the calorie density of the
/// distinct foods it contains
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_calories: f64,

    /// Canonical table names of matched foods, in order of first match
    #[serde(skip)]
    pub distinct_matched_foods: Vec<String>,

    #[serde(rename = "total_calories_in_selected_food_items_per_100g_sum")]
    pub sum_calories_per_100g: f64,
    pub average_calories_per_100g: Option<f64>,
    pub median_calories_per_100g: Option<f64>,
    pub min_calories_per_100g: Option<f64>,
    pub max_calories_per_100g: Option<f64>,
    pub std_deviation_calories_per_100g: Option<f64>,

    #[serde(rename = "highest_calorie_foods_in_selection")]
    pub highest_calorie_foods: Vec<FoodCalories>,
    #[serde(rename = "lowest_calorie_foods_in_selection")]
    pub lowest_calorie_foods: Vec<FoodCalories>,

    #[serde(skip)]
    pub skipped: SkippedEntries,
}

impl AnalysisResult {
    /// Result for a meal with no usable entries
    pub fn empty() -> Self {
        Self {
            total_calories: 0.0,
            distinct_matched_foods: Vec::new(),
            sum_calories_per_100g: 0.0,
            average_calories_per_100g: None,
            median_calories_per_100g: None,
            min_calories_per_100g: None,
            max_calories_per_100g: None,
            std_deviation_calories_per_100g: None,
            highest_calorie_foods: Vec::new(),
            lowest_calorie_foods: Vec::new(),
            skipped: SkippedEntries::default(),
        }
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_wire_shape() {
        let json = serde_json::to_value(AnalysisResult::empty()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 9);
        assert_eq!(json["total_calories"], 0.0);
        assert_eq!(json["total_calories_in_selected_food_items_per_100g_sum"], 0.0);
        assert!(json["average_calories_per_100g"].is_null());
        assert!(json["median_calories_per_100g"].is_null());
        assert!(json["min_calories_per_100g"].is_null());
        assert!(json["max_calories_per_100g"].is_null());
        assert!(json["std_deviation_calories_per_100g"].is_null());
        assert_eq!(json["highest_calorie_foods_in_selection"], serde_json::json!([]));
        assert_eq!(json["lowest_calorie_foods_in_selection"], serde_json::json!([]));
    }

    #[test]
    fn test_skipped_total() {
        let skipped = SkippedEntries { malformed: 2, unmatched: 3 };
        assert_eq!(skipped.total(), 5);
    }
}
