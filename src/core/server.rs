//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services. Every service shares
//! one `DocumentStore`, except prompts, which never touch it.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! The rmcp ToolRouter is built in `domains/tools/router.rs`; the
//! `ToolRegistry` in `domains/tools/registry.rs` provides the same tools
//! through name-based dispatch.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::{
    documents::DocumentStore, prompts::PromptService, resources::ResourceService,
    tools::{ToolRegistry, build_tool_router},
};

/// Instructions sent to clients on initialization.
const INSTRUCTIONS: &str = "This server holds a fixed set of text documents. \
    Read the 'docs://documents' resource to list document ids, read a document with \
    'read_doc_contents' or 'docs://documents/{doc_id}', and change it with \
    'edit_doc_contents' (exact substring replacement). The 'format' and 'summarize' \
    prompts produce instructions for working on a document.";

/// The main MCP server handler.
///
/// Cloning is cheap; clones share the same document store.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The shared document registry.
    store: Arc<DocumentStore>,

    /// Name-based tool dispatch.
    tool_registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server, seeding the document store from the config.
    pub fn new(config: Config) -> Self {
        let store = Arc::new(DocumentStore::new(config.documents.seed.clone()));
        Self::with_store(config, store)
    }

    /// Create a new MCP server around an existing document store.
    pub fn with_store(config: Config, store: Arc<DocumentStore>) -> Self {
        info!("Serving {} documents", store.len());

        Self {
            config: Arc::new(config),
            tool_registry: Arc::new(ToolRegistry::new(store.clone())),
            resource_service: Arc::new(ResourceService::new(store.clone())),
            prompt_service: Arc::new(PromptService::new()),
            tool_router: build_tool_router::<Self>(store.clone()),
            store,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the shared document store.
    pub fn store(&self) -> &Arc<DocumentStore> {
        &self.store
    }

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    /// Call a tool by name with JSON arguments.
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> CoreResult<CallToolResult> {
        Ok(self.tool_registry.call_tool(name, arguments)?)
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resource_service.list_resources().await
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.resource_service.list_resource_templates().await
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> CoreResult<ReadResourceResult> {
        Ok(self.resource_service.read_resource(uri).await?)
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompt_service.list_prompts().await
    }

    /// Get a prompt by name with string arguments.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> CoreResult<GetPromptResult> {
        Ok(self.prompt_service.get_prompt(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: McpServer::list_resources(self).await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        Ok(ListResourceTemplatesResult {
            resource_templates: McpServer::list_resource_templates(self).await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        McpServer::read_resource(self, &request.uri)
            .await
            .map_err(McpError::from)
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        Ok(ListPromptsResult {
            prompts: McpServer::list_prompts(self).await,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        // Non-string argument values are dropped, leaving required ones missing
        let arguments = request.arguments.map(|map| {
            map.into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect()
        });
        McpServer::get_prompt(self, &request.name, arguments)
            .await
            .map_err(McpError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::Document;
    use serde_json::json;

    fn test_server() -> McpServer {
        let store = Arc::new(DocumentStore::new(vec![Document::new("a.md", "hello world")]));
        McpServer::with_store(Config::default(), store)
    }

    #[test]
    fn test_server_from_config_seeds_store() {
        let server = McpServer::new(Config::default());
        assert_eq!(server.store().len(), 6);
        assert_eq!(server.name(), "DocumentMCP");
    }

    #[test]
    fn test_get_info() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert_eq!(info.server_info.name, "DocumentMCP");
    }

    #[test]
    fn test_list_tools() {
        let names: Vec<_> = test_server()
            .list_tools()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        assert!(names.contains(&"read_doc_contents".to_string()));
        assert!(names.contains(&"edit_doc_contents".to_string()));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let server = test_server();
        let clone = server.clone();

        clone
            .call_tool(
                "edit_doc_contents",
                json!({ "doc_id": "a.md", "old_str": "hello", "new_str": "goodbye" }),
            )
            .unwrap();

        let result = server.read_resource("docs://documents/a.md").await.unwrap();
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => {
                assert_eq!(text, "goodbye world")
            }
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_read_missing_resource_maps_to_mcp_error() {
        let server = test_server();
        let err = server.read_resource("docs://documents/nope.md").await.unwrap_err();
        let mcp = McpError::from(err);
        assert_eq!(mcp.code, ErrorCode::RESOURCE_NOT_FOUND);
        assert!(mcp.message.contains("nope.md"));
    }

    #[tokio::test]
    async fn test_get_prompt_unknown_maps_to_invalid_params() {
        let server = test_server();
        let err = server.get_prompt("unknown", None).await.unwrap_err();
        assert_eq!(McpError::from(err).code, ErrorCode::INVALID_PARAMS);
    }
}
