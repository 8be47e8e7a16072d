//! Transport layer for the MCP server.
//!
//! - **STDIO**: Standard input/output, one long-lived session (default) - feature: `stdio`
//! - **TCP**: Line-delimited JSON-RPC over TCP, one session per connection - feature: `tcp`
//!
//! Both hand the byte stream to rmcp, which frames the messages and routes
//! them to the `McpServer` handler.

mod config;
mod error;
mod service;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;
