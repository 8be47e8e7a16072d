//! Resource Registry - central registration of all resources.
//!
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()` or `get_all_resource_templates()`

use rmcp::model::{AnnotateAble, RawResource, RawResourceTemplate};

use super::definitions::{
    DocumentIndexResource, DocumentResource, ResourceDefinition, ResourceTemplateDefinition,
};
use super::service::{ResourceEntry, TemplateEntry};

/// Build a registry entry from a fixed-URI resource definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        reader: R::read,
    }
}

/// Build a registry entry from a resource template definition.
fn build_template<R: ResourceTemplateDefinition>() -> TemplateEntry {
    TemplateEntry {
        template: RawResourceTemplate {
            uri_template: R::URI_TEMPLATE.to_string(),
            name: R::NAME.to_string(),
            title: Some(R::TITLE.to_string()),
            description: Some(R::DESCRIPTION.to_string()),
            mime_type: Some(R::MIME_TYPE.to_string()),
        }
        .no_annotation(),
        reader: R::read,
    }
}

/// Get all registered fixed-URI resources.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![build_resource::<DocumentIndexResource>()]
}

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<TemplateEntry> {
    vec![build_template::<DocumentResource>()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].resource.raw.uri, "docs://documents");
        assert_eq!(
            resources[0].resource.raw.mime_type.as_deref(),
            Some("application/json")
        );
    }

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].template.raw.uri_template, "docs://documents/{doc_id}");
        assert_eq!(templates[0].template.raw.mime_type.as_deref(), Some("text/plain"));
    }
}
