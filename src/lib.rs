//! Document MCP Server Library
//!
//! A Model Context Protocol server holding a fixed set of named text
//! documents in memory and exposing them to an orchestrating agent.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **documents**: The shared document registry
//!   - **tools**: `read_doc_contents` and `edit_doc_contents`
//!   - **resources**: `docs://documents` and `docs://documents/{doc_id}`
//!   - **prompts**: `format` and `summarize`
//!
//! # Example
//!
//! ```rust,no_run
//! use document_mcp_server::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result, TransportService};
pub use domains::documents::{Document, DocumentError, DocumentStore};
