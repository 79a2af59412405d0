//! Meal Analysis Tools
//!
//! Request-level wrapper around the analyzer.

use serde::Serialize;
use serde_json::Value;

use crate::models::{AnalysisResult, MealEntry};
use crate::nutrition::{analyze, AnalysisError};
use crate::table::ReferenceTable;

/// Response when the calorie table is not available
#[derive(Debug, Serialize)]
pub struct AnalysisErrorResponse {
    pub error: String,
}

impl From<AnalysisError> for AnalysisErrorResponse {
    fn from(err: AnalysisError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Analyze submitted meal items against the loaded table
///
/// Items are taken as loose JSON so a badly shaped item only drops that item.
pub fn analyze_meal(
    table: &ReferenceTable,
    meal_items: &[Value],
) -> Result<AnalysisResult, AnalysisErrorResponse> {
    let entries = MealEntry::from_values(meal_items);

    let result = analyze(table, &entries).map_err(|e| {
        tracing::error!("Meal analysis refused: {}", e);
        AnalysisErrorResponse::from(e)
    })?;

    tracing::info!(
        "Analyzed meal: {} item(s), {} matched food(s), {:.1} kcal",
        entries.len(),
        result.distinct_matched_foods.len(),
        result.total_calories
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceRow;
    use serde_json::json;

    fn table() -> ReferenceTable {
        ReferenceTable::from_rows(vec![
            ReferenceRow::new("Apple", 52.0).unwrap(),
            ReferenceRow::new("Banana", 89.0).unwrap(),
            ReferenceRow::new("Rice", 130.0).unwrap(),
        ])
    }

    #[test]
    fn test_analyze_meal_from_json() {
        let items = vec![
            json!({"food_item": "apple", "quantity": 150}),
            json!({"food_item": "Banana", "quantity": 100.0}),
        ];
        let result = analyze_meal(&table(), &items).unwrap();
        assert!((result.total_calories - 167.0).abs() < 0.001);
        assert_eq!(result.distinct_matched_foods, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_badly_shaped_items_are_skipped() {
        let items = vec![
            json!("Rice"),
            json!({"food_item": "Rice"}),
            json!({"food_item": "Rice", "quantity": "200"}),
            json!({"quantity": 200}),
            json!({"food_item": "Rice", "quantity": 100}),
        ];
        let result = analyze_meal(&table(), &items).unwrap();
        assert!((result.total_calories - 130.0).abs() < 0.001);
        assert_eq!(result.skipped.malformed, 4);
    }

    #[test]
    fn test_empty_table_reports_error() {
        let items = vec![json!({"food_item": "Apple", "quantity": 100})];
        let err = analyze_meal(&ReferenceTable::empty(), &items).unwrap_err();
        assert_eq!(err.error, "Calorie data not loaded.");
    }
}
