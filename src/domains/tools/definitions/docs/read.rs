//! Read document tool definition.
//!
//! Returns the full text of one document.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::documents::{DocumentError, DocumentStore};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the read document tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadDocContentsParams {
    /// Id of the document to read.
    pub doc_id: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Read document tool - returns a document's text verbatim.
pub struct ReadDocContentsTool;

impl ReadDocContentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_doc_contents";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Read the contents of a document and return it as a string.";

    /// Look up the document text.
    pub fn run(params: &ReadDocContentsParams, store: &DocumentStore) -> Result<String, DocumentError> {
        store.get(&params.doc_id)
    }

    /// Execute the tool logic and wrap the outcome for MCP.
    #[instrument(skip_all, fields(doc_id = %params.doc_id))]
    pub fn execute(params: &ReadDocContentsParams, store: &DocumentStore) -> CallToolResult {
        info!("Read tool called for '{}'", params.doc_id);

        match Self::run(params, store) {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(e) => {
                warn!("Read failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<ReadDocContentsParams>().into(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(store: Arc<DocumentStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: ReadDocContentsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &store))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::Document;

    fn test_store() -> DocumentStore {
        DocumentStore::new(vec![Document::new("a.md", "hello world")])
    }

    fn text_of(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_read_existing() {
        let params = ReadDocContentsParams {
            doc_id: "a.md".to_string(),
        };
        let result = ReadDocContentsTool::execute(&params, &test_store());
        assert_eq!(result.is_error, Some(false));
        assert_eq!(text_of(&result), "hello world");
    }

    #[test]
    fn test_read_missing() {
        let params = ReadDocContentsParams {
            doc_id: "missing.md".to_string(),
        };
        let store = test_store();

        let err = ReadDocContentsTool::run(&params, &store).unwrap_err();
        assert_eq!(err, DocumentError::not_found("missing.md"));

        let result = ReadDocContentsTool::execute(&params, &store);
        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "Doc with id missing.md not found.");
    }

    #[test]
    fn test_tool_metadata() {
        let tool = ReadDocContentsTool::to_tool();
        assert_eq!(tool.name, "read_doc_contents");

        let schema = serde_json::Value::Object((*tool.input_schema).clone());
        assert!(schema["properties"]["doc_id"].is_object());
        assert_eq!(schema["required"], serde_json::json!(["doc_id"]));
    }
}
