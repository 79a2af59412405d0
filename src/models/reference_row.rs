//! Reference row model
//!
//! One food from the calorie reference table.

use serde::Serialize;
use thiserror::Error;

/// Why a candidate row was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("food name is blank")]
    BlankName,

    #[error("calories per 100g must be a finite, non-negative number (got {0})")]
    InvalidCalories(f64),
}

/// A food with its calorie density
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    #[serde(rename = "food_item")]
    food_name: String,
    calories_per_100g: f64,
    calories_per_gram: f64,
}

impl ReferenceRow {
    /// Build a row, deriving calories per gram from the per-100g value
    pub fn new(food_name: impl Into<String>, calories_per_100g: f64) -> Result<Self, RowError> {
        let food_name = food_name.into().trim().to_string();
        if food_name.is_empty() {
            return Err(RowError::BlankName);
        }
        if !calories_per_100g.is_finite() || calories_per_100g < 0.0 {
            return Err(RowError::InvalidCalories(calories_per_100g));
        }

        Ok(Self {
            food_name,
            calories_per_100g,
            calories_per_gram: calories_per_100g / 100.0,
        })
    }

    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    pub fn calories_per_100g(&self) -> f64 {
        self.calories_per_100g
    }

    pub fn calories_per_gram(&self) -> f64 {
        self.calories_per_gram
    }

    /// Case-folded name used as the lookup key
    pub fn lookup_key(&self) -> String {
        self.food_name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_calories_per_gram() {
        let row = ReferenceRow::new("Apple", 52.0).unwrap();
        assert_eq!(row.food_name(), "Apple");
        assert!((row.calories_per_gram() - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_trims_name() {
        let row = ReferenceRow::new("  Rice  ", 130.0).unwrap();
        assert_eq!(row.food_name(), "Rice");
        assert_eq!(row.lookup_key(), "rice");
    }

    #[test]
    fn test_rejects_blank_name() {
        assert_eq!(ReferenceRow::new("   ", 10.0), Err(RowError::BlankName));
    }

    #[test]
    fn test_rejects_bad_calories() {
        assert!(matches!(
            ReferenceRow::new("Oil", -1.0),
            Err(RowError::InvalidCalories(_))
        ));
        assert!(ReferenceRow::new("Oil", f64::NAN).is_err());
        assert!(ReferenceRow::new("Oil", f64::INFINITY).is_err());
        assert!(ReferenceRow::new("Water", 0.0).is_ok());
    }

    #[test]
    fn test_serializes_wire_names() {
        let row = ReferenceRow::new("Banana", 89.0).unwrap();
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["food_item"], "Banana");
        assert_eq!(json["calories_per_100g"], 89.0);
    }
}
