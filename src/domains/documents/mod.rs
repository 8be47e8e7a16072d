//! Documents domain module.
//!
//! This module owns the document registry: the single in-memory store that
//! every tool and resource reads from or writes to. The set of document ids
//! is closed once the store is built; only the text of an existing document
//! can change.
//!
//! ## Architecture
//!
//! - `store.rs` - `DocumentStore`, the shared registry
//! - `seed.rs` - The documents the server starts with
//! - `error.rs` - Document-specific error types

mod error;
mod seed;
mod store;

pub use error::DocumentError;
pub use seed::default_documents;
pub use store::{Document, DocumentStore};
