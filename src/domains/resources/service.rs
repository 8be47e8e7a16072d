//! Resource service implementation.
//!
//! The ResourceService resolves resource URIs against the registered fixed
//! resources first, then against the URI templates, and reads the content
//! from the shared document store.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use super::uri::match_template;
use crate::domains::documents::DocumentStore;

/// Reads the content of a fixed-URI resource.
pub type ResourceReader = fn(&DocumentStore) -> Result<String, ResourceError>;

/// Reads the content of a templated resource from its bound parameters.
pub type TemplateReader =
    fn(&HashMap<String, String>, &DocumentStore) -> Result<String, ResourceError>;

/// A fixed-URI entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content reader for this resource.
    pub reader: ResourceReader,
}

/// A URI template entry in the resource registry.
#[derive(Debug, Clone)]
pub struct TemplateEntry {
    /// The template metadata.
    pub template: ResourceTemplate,

    /// The content reader for resources matching this template.
    pub reader: TemplateReader,
}

/// Service for listing and reading resources.
pub struct ResourceService {
    /// Shared document store.
    store: Arc<DocumentStore>,

    /// Fixed-URI resources, in registration order.
    resources: Vec<ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<TemplateEntry>,
}

impl ResourceService {
    /// Create a new ResourceService over the given document store.
    pub fn new(store: Arc<DocumentStore>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            store,
            resources: Vec::new(),
            templates: Vec::new(),
        };

        service.register_from_registry();

        service
    }

    /// Register all resources and templates from the registry.
    fn register_from_registry(&mut self) {
        for entry in get_all_resources() {
            info!("Registering resource: {}", entry.resource.raw.uri);
            self.resources.push(entry);
        }
        for entry in get_all_resource_templates() {
            info!("Registering resource template: {}", entry.template.raw.uri_template);
            self.templates.push(entry);
        }
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates
            .iter()
            .map(|entry| entry.template.clone())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        if let Some(entry) = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
        {
            let text = (entry.reader)(&self.store)?;
            return Ok(text_result(uri, text, entry.resource.raw.mime_type.clone()));
        }

        for entry in &self.templates {
            if let Some(params) = match_template(&entry.template.raw.uri_template, uri) {
                debug!("URI {} matched template {}", uri, entry.template.raw.uri_template);
                let text = (entry.reader)(&params, &self.store)?;
                return Ok(text_result(uri, text, entry.template.raw.mime_type.clone()));
            }
        }

        warn!("No resource matches URI: {}", uri);
        Err(ResourceError::not_found(uri))
    }
}

/// Wrap text content in a read result.
fn text_result(uri: &str, text: String, mime_type: Option<String>) -> ReadResourceResult {
    let mut content = ResourceContents::text(text, uri);
    if let ResourceContents::TextResourceContents {
        mime_type: slot, ..
    } = &mut content
    {
        *slot = mime_type;
    }

    ReadResourceResult {
        contents: vec![content],
    }
}
