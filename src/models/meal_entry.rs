//! Meal Entry model
//!
//! One submitted line of a meal: a food name and an amount eaten.

use serde::Serialize;
use serde_json::Value;

use crate::nutrition::to_grams;

/// A submitted (food, quantity) pair
///
/// Every field is optional because request items are accepted as loose JSON;
/// the analyzer decides what is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealEntry {
    #[serde(rename = "food_item")]
    pub food_name: Option<String>,
    pub quantity: Option<f64>,
    /// Weight unit for `quantity`; grams when absent
    pub unit: Option<String>,
}

/// Why an entry could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryProblem {
    MissingName,
    MissingQuantity,
    NonPositiveQuantity,
    UnknownUnit,
    /// Quantity times calorie density does not fit in an f64
    CalorieOverflow,
}

impl EntryProblem {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryProblem::MissingName => "missing food name",
            EntryProblem::MissingQuantity => "missing quantity",
            EntryProblem::NonPositiveQuantity => "quantity is zero, negative or not a number",
            EntryProblem::UnknownUnit => "unrecognized weight unit",
            EntryProblem::CalorieOverflow => "calorie total too large to represent",
        }
    }
}

impl MealEntry {
    /// Entry with a quantity already in grams
    pub fn grams(food_name: impl Into<String>, quantity: f64) -> Self {
        Self {
            food_name: Some(food_name.into()),
            quantity: Some(quantity),
            unit: None,
        }
    }

    /// Entry with an explicit weight unit
    pub fn with_unit(food_name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            food_name: Some(food_name.into()),
            quantity: Some(quantity),
            unit: Some(unit.into()),
        }
    }

    /// Read an entry from a loosely-typed request item
    ///
    /// Anything that is not an object, or fields of the wrong JSON type,
    /// become missing fields rather than errors.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            food_name: obj.get("food_item").and_then(Value::as_str).map(str::to_string),
            quantity: obj.get("quantity").and_then(Value::as_f64),
            unit: obj.get("unit").and_then(Value::as_str).map(str::to_string),
        }
    }

    /// Parse a list of request items
    pub fn from_values(values: &[Value]) -> Vec<Self> {
        values.iter().map(Self::from_value).collect()
    }

    /// The submitted name, if it is present and not blank
    pub fn name(&self) -> Option<&str> {
        self.food_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }

    /// Quantity converted to grams
    pub fn quantity_grams(&self) -> Result<f64, EntryProblem> {
        let quantity = self.quantity.ok_or(EntryProblem::MissingQuantity)?;

        let grams = match self.unit.as_deref() {
            None => quantity,
            Some(unit) if unit.trim().is_empty() => quantity,
            Some(unit) => to_grams(quantity, unit).ok_or(EntryProblem::UnknownUnit)?,
        };

        if !grams.is_finite() || grams <= 0.0 {
            return Err(EntryProblem::NonPositiveQuantity);
        }
        Ok(grams)
    }

    /// Validate the entry, returning its name and gram quantity
    pub fn validate(&self) -> Result<(&str, f64), EntryProblem> {
        let name = self.name().ok_or(EntryProblem::MissingName)?;
        let grams = self.quantity_grams()?;
        Ok((name, grams))
    }
}
