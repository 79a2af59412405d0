//! Calorie table loading
//!
//! Reads the comma-separated calorie list into a [`ReferenceTable`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::models::ReferenceRow;
use super::ReferenceTable;

/// Header of the food name column
pub const FOOD_ITEM_COLUMN: &str = "Food Item";
/// Header of the calorie density column
pub const CALORIES_COLUMN: &str = "Calories in kcal per 100g";

/// Table loading error types
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Calorie table file does not exist: {0}")]
    NotFound(String),

    #[error("Failed to read calorie table: {0}")]
    Io(#[from] std::io::Error),

    #[error("Calorie table has no header row")]
    MissingHeader,

    #[error("Missing expected column '{0}' (column names are case-sensitive)")]
    MissingColumn(&'static str),
}

/// Result type for table loading
pub type TableResult<T> = Result<T, TableError>;

/// Summary of a table load
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub rows_loaded: usize,
    pub rows_skipped: usize,
    pub duplicates: usize,
    pub errors: Vec<String>,
}

/// A loaded table together with its load report
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: ReferenceTable,
    pub report: LoadReport,
}

/// Load the calorie table from a file
pub fn load_table<P: AsRef<Path>>(path: P) -> TableResult<LoadedTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TableError::NotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let loaded = load_from_reader(BufReader::new(file))?;

    tracing::info!(
        "Loaded {} calorie rows from {} ({} skipped, {} duplicates)",
        loaded.report.rows_loaded,
        path.display(),
        loaded.report.rows_skipped,
        loaded.report.duplicates
    );

    Ok(loaded)
}

/// Load the calorie table, falling back to an empty table on failure
///
/// An empty table makes every analysis report the data as unavailable, so
/// the service can still start and explain the problem.
pub fn load_table_or_empty<P: AsRef<Path>>(path: P) -> (ReferenceTable, Result<LoadReport, String>) {
    match load_table(path) {
        Ok(loaded) => (loaded.table, Ok(loaded.report)),
        Err(e) => {
            tracing::error!("{}", e);
            (ReferenceTable::empty(), Err(e.to_string()))
        }
    }
}

/// Load the calorie table from any buffered reader
pub fn load_from_reader<R: BufRead>(reader: R) -> TableResult<LoadedTable> {
    let mut lines = reader.lines();

    let header = loop {
        match lines.next() {
            Some(line) => {
                let line = line?;
                if !line.trim().is_empty() {
                    break line;
                }
            }
            None => return Err(TableError::MissingHeader),
        }
    };

    let columns = split_record(header.trim_start_matches('\u{feff}'));
    let name_col = find_column(&columns, FOOD_ITEM_COLUMN)?;
    let calories_col = find_column(&columns, CALORIES_COLUMN)?;

    let mut table = ReferenceTable::empty();
    let mut report = LoadReport::default();

    for (offset, line) in lines.enumerate() {
        // Header is line 1
        let line_num = offset + 2;
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        let fields = split_record(&line);
        let (Some(name), Some(calories)) = (fields.get(name_col), fields.get(calories_col)) else {
            skip_row(&mut report, format!("Row {}: Not enough fields", line_num));
            continue;
        };

        let Some(calories) = parse_calories(calories) else {
            skip_row(
                &mut report,
                format!("Row {}: Invalid calorie value '{}'", line_num, calories.trim()),
            );
            continue;
        };

        let row = match ReferenceRow::new(name.as_str(), calories) {
            Ok(row) => row,
            Err(e) => {
                skip_row(&mut report, format!("Row {}: {}", line_num, e));
                continue;
            }
        };

        if table.insert(row) {
            report.rows_loaded += 1;
        } else {
            tracing::warn!("Row {}: duplicate food item '{}' ignored", line_num, name.trim());
            report.duplicates += 1;
        }
    }

    Ok(LoadedTable { table, report })
}

fn skip_row(report: &mut LoadReport, message: String) {
    tracing::warn!("{}", message);
    report.rows_skipped += 1;
    report.errors.push(message);
}

fn find_column(columns: &[String], name: &'static str) -> TableResult<usize> {
    columns
        .iter()
        .position(|c| c.trim() == name)
        .ok_or(TableError::MissingColumn(name))
}

/// Parse a calorie cell such as "52", " 52.5 " or "52 kcal"
fn parse_calories(cell: &str) -> Option<f64> {
    let lower = cell.trim().to_lowercase();
    let number = lower
        .strip_suffix("kcal")
        .or_else(|| lower.strip_suffix("cal"))
        .unwrap_or(&lower)
        .trim();

    number.parse::<f64>().ok()
}

/// Split one CSV line into fields, honouring double quotes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);

    fields
}
