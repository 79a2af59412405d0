//! Food Item Tools
//!
//! Read-only browsing of the calorie reference table.

use serde::Serialize;

use crate::models::ReferenceRow;
use crate::table::{CalorieLookup, ReferenceTable};

/// Response for list_food_items
#[derive(Debug, Serialize)]
pub struct ListFoodItemsResponse {
    pub items: Vec<String>,
    pub count: usize,
    pub table_size: usize,
    pub limit: usize,
}

/// Full food item detail response
#[derive(Debug, Serialize)]
pub struct FoodItemDetail {
    pub food_item: String,
    pub calories_per_100g: f64,
    pub calories_per_gram: f64,
}

impl From<&ReferenceRow> for FoodItemDetail {
    fn from(row: &ReferenceRow) -> Self {
        Self {
            food_item: row.food_name().to_string(),
            calories_per_100g: row.calories_per_100g(),
            calories_per_gram: row.calories_per_gram(),
        }
    }
}

/// List food names, optionally filtered by a substring
pub fn list_food_items(table: &ReferenceTable, query: Option<&str>, limit: usize) -> ListFoodItemsResponse {
    let limit = limit.clamp(1, 500);

    let items: Vec<String> = table
        .food_names(query, limit)
        .into_iter()
        .map(str::to_string)
        .collect();

    ListFoodItemsResponse {
        count: items.len(),
        items,
        table_size: table.len(),
        limit,
    }
}

/// Look up one food item by name (case-insensitive)
pub fn get_food_item(table: &ReferenceTable, name: &str) -> Option<FoodItemDetail> {
    table.lookup_case_insensitive(name).map(FoodItemDetail::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ReferenceTable {
        ReferenceTable::from_rows(
            ["Apple", "Apricot", "Banana"]
                .iter()
                .map(|name| ReferenceRow::new(*name, 50.0).unwrap()),
        )
    }

    #[test]
    fn test_list_all() {
        let resp = list_food_items(&table(), None, 50);
        assert_eq!(resp.items, vec!["Apple", "Apricot", "Banana"]);
        assert_eq!(resp.count, 3);
        assert_eq!(resp.table_size, 3);
    }

    #[test]
    fn test_list_filtered_and_clamped() {
        let resp = list_food_items(&table(), Some("ap"), 0);
        assert_eq!(resp.limit, 1);
        assert_eq!(resp.items, vec!["Apple"]);

        let resp = list_food_items(&table(), Some("AP"), 10_000);
        assert_eq!(resp.limit, 500);
        assert_eq!(resp.items, vec!["Apple", "Apricot"]);
    }

    #[test]
    fn test_get_food_item() {
        let detail = get_food_item(&table(), "banana").unwrap();
        assert_eq!(detail.food_item, "Banana");
        assert!((detail.calories_per_gram - 0.5).abs() < 1e-12);
        assert!(get_food_item(&table(), "Mango").is_none());
    }
}
