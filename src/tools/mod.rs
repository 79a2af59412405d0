//! Meal Analyzer Tools module
//!
//! Tool implementations behind the MCP server.

pub mod food_items;
pub mod meal_analysis;
pub mod status;
