//! Resource definitions module.
//!
//! Each resource is defined in its own file with:
//! - URI (or URI template) and metadata
//! - A reader producing the content from the document store
//!
//! ## Adding a New Resource
//!
//! 1. Create a new file (e.g., `my_resource.rs`)
//! 2. Implement `ResourceDefinition` or `ResourceTemplateDefinition`
//! 3. Export it here
//! 4. Register in `registry.rs`

use std::collections::HashMap;

use super::error::ResourceError;
use crate::domains::documents::DocumentStore;

pub mod document;
pub mod document_index;

pub use document::DocumentResource;
pub use document_index::DocumentIndexResource;

/// Trait for resources reachable at a fixed URI.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the current content.
    fn read(store: &DocumentStore) -> Result<String, ResourceError>;
}

/// Trait for parameterized resources described by a URI template.
pub trait ResourceTemplateDefinition {
    /// The URI template (e.g. `scheme://path/{param}`).
    const URI_TEMPLATE: &'static str;

    /// The display name of the template.
    const NAME: &'static str;

    /// A human-readable title.
    const TITLE: &'static str;

    /// A description of the resources the template addresses.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Produce the content for the bound template parameters.
    fn read(
        params: &HashMap<String, String>,
        store: &DocumentStore,
    ) -> Result<String, ResourceError>;
}
