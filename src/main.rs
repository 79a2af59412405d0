//! Meal Analyzer
//!
//! An MCP server for meal calorie analysis.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use meal_analyzer::build_info;
use meal_analyzer::config;
use meal_analyzer::mcp::MealAnalyzerService;
use meal_analyzer::table::{self, CalorieLookup};
use meal_analyzer::tools::status::StatusTracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stdio transport
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(config::DEFAULT_LOG_DIRECTIVE.parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let table_path = config::get_table_path();
    eprintln!("Calorie table path: {}", table_path.display());

    let (reference_table, table_load) = table::load_table_or_empty(&table_path);
    if reference_table.is_empty() {
        tracing::warn!("Calorie table is empty; meal analysis will report data unavailable");
    }

    let status_tracker = StatusTracker::new(table_path, reference_table.len(), table_load);
    let service = MealAnalyzerService::new(Arc::new(reference_table), status_tracker);

    eprintln!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;
    server.waiting().await?;

    Ok(())
}
