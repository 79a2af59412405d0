//! Analyzer Status Tool
//!
//! Runtime status of the service and its calorie table.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::table::LoadReport;

/// Meal analysis instructions for AI assistants
pub const MEAL_INSTRUCTIONS: &str = r#"
# Meal Analyzer Instructions

## Overview

The analyzer totals the calories of a meal and summarizes the calorie density
(kcal per 100g) of the foods in it. Foods come from a fixed calorie table.

## Workflow

1. Call `list_food_items` (optionally with `query`) to find exact food names.
2. Call `analyze_meal` with `meal_items`, a list of objects:
   `{"food_item": "Banana", "quantity": 120}`
   - `quantity` is in grams unless `unit` is given (g, mg, kg, oz, lb).
   - Names are matched ignoring case, but otherwise exactly.
3. Read the result:
   - `total_calories` for the whole meal.
   - `*_calories_per_100g` statistics over the distinct foods eaten.
   - `highest_/lowest_calorie_foods_in_selection` (up to 5 each).

## Notes

- Items with a missing name, a zero/negative quantity, or an unknown unit are
  skipped. Unknown food names are skipped too. The rest are still analyzed.
- Statistics are `null` when no food matched. Standard deviation needs at
  least two distinct foods.
- If the calorie table failed to load, `analyze_meal` returns an error
  ("Calorie data not loaded."). Check `analyzer_status`.
"#;

/// Runtime status of the analyzer service
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzerStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Calorie table information
    pub table_path: String,
    pub table_rows: usize,
    pub table_load: Option<LoadReport>,
    pub table_error: Option<String>,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    table_path: PathBuf,
    table_rows: usize,
    table_load: Result<LoadReport, String>,
}

impl StatusTracker {
    /// `table_load` is the loader's report, or the error that left the table empty
    pub fn new(table_path: PathBuf, table_rows: usize, table_load: Result<LoadReport, String>) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            table_path,
            table_rows,
            table_load,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> AnalyzerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        let (table_load, table_error) = match &self.table_load {
            Ok(report) => (Some(report.clone()), None),
            Err(e) => (None, Some(e.clone())),
        };

        AnalyzerStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            table_path: self.table_path.display().to_string(),
            table_rows: self.table_rows,
            table_load,
            table_error,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_after_successful_load() {
        let report = LoadReport {
            rows_loaded: 3,
            ..Default::default()
        };
        let tracker = StatusTracker::new(PathBuf::from("data/Calorie List.csv"), 3, Ok(report));
        let status = tracker.get_status();

        assert_eq!(status.table_rows, 3);
        assert_eq!(status.table_load.unwrap().rows_loaded, 3);
        assert!(status.table_error.is_none());
        assert_eq!(status.process_id, std::process::id());
    }

    #[test]
    fn test_status_after_failed_load() {
        let tracker = StatusTracker::new(
            PathBuf::from("missing.csv"),
            0,
            Err("Calorie table file does not exist: missing.csv".to_string()),
        );
        let status = tracker.get_status();

        assert_eq!(status.table_rows, 0);
        assert!(status.table_load.is_none());
        assert!(status.table_error.unwrap().contains("missing.csv"));
    }
}
