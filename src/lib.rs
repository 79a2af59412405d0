//! Meal Analyzer Library
//!
//! Calorie totals and calorie density statistics for meals, computed against
//! a static calorie reference table.

pub mod build_info;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod table;
pub mod tools;
