//! Weight units and conversion constants
//!
//! Meal quantities are analyzed in grams; these convert other weight units.

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per ounce
pub const G_PER_OZ: f64 = 28.3495;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Get the conversion factor to grams for a weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();
    let trimmed = lower.trim();

    match trimmed {
        "g" | "gram" | "grams" => Some(1.0),
        "mg" | "milligram" | "milligrams" => Some(G_PER_MG),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Convert a weight to grams, if the unit is known
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    grams_per_unit(unit).map(|factor| quantity * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit(" Grams "), Some(1.0));
        assert_eq!(grams_per_unit("oz"), Some(G_PER_OZ));
        assert_eq!(grams_per_unit("LB"), Some(G_PER_LB));
        assert_eq!(grams_per_unit("kg"), Some(G_PER_KG));
        assert_eq!(grams_per_unit("tbsp"), None);
        assert_eq!(grams_per_unit("ml"), None);
    }

    #[test]
    fn test_to_grams() {
        assert_eq!(to_grams(2.0, "kg"), Some(2000.0));
        assert_eq!(to_grams(500.0, "mg"), Some(0.5));
        assert_eq!(to_grams(1.0, "cup"), None);
    }
}
