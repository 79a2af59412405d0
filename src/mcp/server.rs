//! Meal Analyzer MCP Server Implementation
//!
//! Exposes meal analysis and calorie table browsing as MCP tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;

use crate::table::ReferenceTable;
use crate::tools::food_items;
use crate::tools::meal_analysis;
use crate::tools::status::StatusTracker;

/// Meal Analyzer MCP Service
#[derive(Clone)]
pub struct MealAnalyzerService {
    table: Arc<ReferenceTable>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<MealAnalyzerService>,
}

impl MealAnalyzerService {
    pub fn new(table: Arc<ReferenceTable>, status_tracker: StatusTracker) -> Self {
        Self {
            table,
            status_tracker: Arc::new(status_tracker),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeMealParams {
    /// Meal items: [{"food_item": "Banana", "quantity": 120, "unit": "g"}]. Quantity is grams unless unit (g, mg, kg, oz, lb) is given.
    #[serde(default)]
    pub meal_items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodItemsParams {
    /// Case-insensitive substring filter on the food name
    pub query: Option<String>,
    #[serde(default = "default_list_limit")]
    pub limit: usize,
}

fn default_list_limit() -> usize { 100 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetFoodItemParams {
    /// Food name (matched ignoring case)
    pub name: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl MealAnalyzerService {
    #[tool(description = "Get the current status of the meal analyzer including build info, calorie table load results, and process information")]
    fn analyzer_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for analyzing meals. Call this when unsure how to format meal items.")]
    fn meal_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MEAL_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MEAL_INSTRUCTIONS)]))
    }

    #[tool(description = "Analyze a meal: total calories plus sum, average, median, min, max, standard deviation and top/bottom 5 of calories per 100g over the distinct foods eaten. Invalid or unknown items are skipped.")]
    fn analyze_meal(&self, Parameters(p): Parameters<AnalyzeMealParams>) -> Result<CallToolResult, McpError> {
        match meal_analysis::analyze_meal(&self.table, &p.meal_items) {
            Ok(result) => {
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::success(vec![Content::text(json)]))
            }
            Err(err) => {
                let json = serde_json::to_string_pretty(&err)
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;
                Ok(CallToolResult::error(vec![Content::text(json)]))
            }
        }
    }

    #[tool(description = "List food names in the calorie table, optionally filtered by a case-insensitive substring")]
    fn list_food_items(&self, Parameters(p): Parameters<ListFoodItemsParams>) -> Result<CallToolResult, McpError> {
        let result = food_items::list_food_items(&self.table, p.query.as_deref(), p.limit);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the calorie density of one food item by name")]
    fn get_food_item(&self, Parameters(p): Parameters<GetFoodItemParams>) -> Result<CallToolResult, McpError> {
        let json = match food_items::get_food_item(&self.table, &p.name) {
            Some(item) => serde_json::to_string_pretty(&item),
            None => serde_json::to_string_pretty(&serde_json::json!({
                "error": "Food item not found",
                "name": p.name,
            })),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for MealAnalyzerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "meal_analyzer".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Meal Analyzer".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Meal Analyzer - calorie totals and calorie density statistics for a meal. \
                 Call meal_instructions first if unsure of the item format. \
                 Foods: list_food_items, get_food_item. \
                 Analysis: analyze_meal. \
                 Diagnostics: analyzer_status."
                    .into(),
            ),
        }
    }
}
