//! Domains module containing business logic organized by bounded contexts.
//!
//! `documents` owns the shared registry; `tools`, `resources` and `prompts`
//! expose it to MCP clients.

pub mod documents;
pub mod prompts;
pub mod resources;
pub mod tools;
