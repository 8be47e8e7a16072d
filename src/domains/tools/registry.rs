//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch with argument validation
//! - Tool metadata for listing

use std::sync::Arc;
use tracing::{info, warn};

use rmcp::model::{CallToolResult, Tool};
use serde::de::DeserializeOwned;

use crate::domains::documents::DocumentStore;

use super::definitions::{EditDocContentsTool, ReadDocContentsTool};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching tool calls by name with JSON arguments
pub struct ToolRegistry {
    store: Arc<DocumentStore>,
}

impl ToolRegistry {
    /// Create a new tool registry over the given document store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![ReadDocContentsTool::NAME, EditDocContentsTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![ReadDocContentsTool::to_tool(), EditDocContentsTool::to_tool()]
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Arguments are validated against the tool's parameter struct before the
    /// tool runs. A missing document is reported inside the returned
    /// `CallToolResult` (`is_error = true`), not as an `Err`.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<CallToolResult, ToolError> {
        info!("Dispatching tool call: {}", name);

        match name {
            ReadDocContentsTool::NAME => {
                let params = parse_arguments(arguments)?;
                Ok(ReadDocContentsTool::execute(&params, &self.store))
            }
            EditDocContentsTool::NAME => {
                let params = parse_arguments(arguments)?;
                Ok(EditDocContentsTool::execute(&params, &self.store))
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

/// Deserialize tool arguments into a typed parameter struct.
fn parse_arguments<T: DeserializeOwned>(arguments: serde_json::Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        serde_json::Value::Object(Default::default())
    } else {
        arguments
    };
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}
