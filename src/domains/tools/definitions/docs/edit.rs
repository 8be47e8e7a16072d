//! Edit document tool definition.
//!
//! Replaces every occurrence of a substring inside one document.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domains::documents::{DocumentError, DocumentStore};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the edit document tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditDocContentsParams {
    /// Id of the document that will be edited.
    pub doc_id: String,

    /// The text to replace. Must match exactly, including whitespace.
    pub old_str: String,

    /// The new text to insert in place of the old text.
    pub new_str: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Edit document tool - exact, case-sensitive substring replacement.
///
/// A pattern that does not occur leaves the document unchanged and is not an
/// error. An unknown document id is.
pub struct EditDocContentsTool;

impl EditDocContentsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "edit_doc_contents";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Edit a document by replacing a string in the document's content with a new string.";

    /// Apply the replacement to the stored document.
    pub fn run(params: &EditDocContentsParams, store: &DocumentStore) -> Result<(), DocumentError> {
        store.update(&params.doc_id, |text| {
            let occurrences = text.matches(params.old_str.as_str()).count();
            debug!("Replacing {} occurrence(s)", occurrences);
            text.replace(&params.old_str, &params.new_str)
        })
    }

    /// Execute the tool logic and wrap the outcome for MCP.
    #[instrument(skip_all, fields(doc_id = %params.doc_id))]
    pub fn execute(params: &EditDocContentsParams, store: &DocumentStore) -> CallToolResult {
        info!("Edit tool called for '{}'", params.doc_id);

        match Self::run(params, store) {
            Ok(()) => CallToolResult::success(Vec::new()),
            Err(e) => {
                warn!("Edit failed: {}", e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<EditDocContentsParams>().into(),
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
                let params: EditDocContentsParams =
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
