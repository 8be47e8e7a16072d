//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and the transport layer, and its mapping onto MCP protocol
//! errors.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::domains::{prompts::PromptError, resources::ResourceError, tools::ToolError};

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Error originating from the resources domain.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        match err {
            Error::Resource(ResourceError::Internal(msg)) => McpError::internal_error(msg, None),
            Error::Resource(ResourceError::Document(e)) => McpError::resource_not_found(
                e.to_string(),
                Some(serde_json::json!({ "doc_id": e.doc_id() })),
            ),
            Error::Resource(e) => McpError::resource_not_found(e.to_string(), None),
            Error::Tool(e) => McpError::invalid_params(e.to_string(), None),
            Error::Prompt(e) => McpError::invalid_params(e.to_string(), None),
            Error::Transport(e) => McpError::internal_error(e.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::DocumentError;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_resource_error_conversion() {
        let err: Error = ResourceError::not_found("docs://other").into();
        assert_eq!(err.to_string(), "Resource error: Resource not found: docs://other");
    }

    #[test]
    fn test_unknown_resource_maps_without_data() {
        let mcp: McpError = Error::from(ResourceError::not_found("docs://other")).into();
        assert_eq!(mcp.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(mcp.data, None);
    }

    #[test]
    fn test_tool_error_maps_to_invalid_params() {
        let mcp: McpError = Error::from(ToolError::not_found("delete_doc")).into();
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_missing_document_maps_to_resource_not_found() {
        let err: Error = ResourceError::from(DocumentError::not_found("x.md")).into();
        let mcp: McpError = err.into();
        assert_eq!(mcp.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert_eq!(mcp.message, "Doc with id x.md not found.");
        assert_eq!(mcp.data, Some(serde_json::json!({ "doc_id": "x.md" })));
    }

    #[test]
    fn test_prompt_error_maps_to_invalid_params() {
        let err: Error = PromptError::missing_argument("doc_id").into();
        let mcp: McpError = err.into();
        assert_eq!(mcp.code, ErrorCode::INVALID_PARAMS);
    }
}
