//! Utility to analyze a meal from a JSON file
//!
//! Usage: analyze_meal_file <meal.json>
//!
//! The file holds either a list of meal items or an object with a
//! `meal_items` list, e.g. `[{"food_item": "Apple", "quantity": 150}]`.

use serde_json::Value;

use meal_analyzer::config;
use meal_analyzer::table;
use meal_analyzer::tools::meal_analysis;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let meal_path = std::env::args()
        .nth(1)
        .ok_or("usage: analyze_meal_file <meal.json>")?;

    let table_path = config::get_table_path();
    eprintln!("Calorie table path: {}", table_path.display());
    let (reference_table, _) = table::load_table_or_empty(&table_path);

    let contents = std::fs::read_to_string(&meal_path)?;
    let document: Value = serde_json::from_str(&contents)?;
    let meal_items = match document {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("meal_items") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => return Err(format!("{}: expected a list of meal items", meal_path).into()),
    };

    match meal_analysis::analyze_meal(&reference_table, &meal_items) {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            if result.skipped.total() > 0 {
                eprintln!(
                    "Skipped {} item(s): {} malformed, {} unmatched",
                    result.skipped.total(),
                    result.skipped.malformed,
                    result.skipped.unmatched
                );
            }
            Ok(())
        }
        Err(err) => Err(err.error.into()),
    }
}
