//! Document index resource definition.

use super::ResourceDefinition;
use crate::domains::documents::DocumentStore;
use crate::domains::resources::error::ResourceError;

/// The ids of every document, as a JSON array in registry order.
pub struct DocumentIndexResource;

impl ResourceDefinition for DocumentIndexResource {
    const URI: &'static str = "docs://documents";
    const NAME: &'static str = "Documents";
    const DESCRIPTION: &'static str = "Ids of all available documents";
    const MIME_TYPE: &'static str = "application/json";

    fn read(store: &DocumentStore) -> Result<String, ResourceError> {
        serde_json::to_string(&store.list_ids()).map_err(|e| ResourceError::internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::documents::Document;

    #[test]
    fn test_document_index_metadata() {
        assert_eq!(DocumentIndexResource::URI, "docs://documents");
        assert_eq!(DocumentIndexResource::MIME_TYPE, "application/json");
    }

    #[test]
    fn test_document_index_read() {
        let store = DocumentStore::new(vec![
            Document::new("a.md", "x"),
            Document::new("b.pdf", "y"),
        ]);
        let content = DocumentIndexResource::read(&store).unwrap();
        let ids: Vec<String> = serde_json::from_str(&content).unwrap();
        assert_eq!(ids, vec!["a.md", "b.pdf"]);
    }

    #[test]
    fn test_document_index_empty_store() {
        let store = DocumentStore::new(Vec::new());
        assert_eq!(DocumentIndexResource::read(&store).unwrap(), "[]");
    }
}
