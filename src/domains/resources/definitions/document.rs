//! Single document resource template.

use std::collections::HashMap;

use super::ResourceTemplateDefinition;
use crate::domains::documents::DocumentStore;
use crate::domains::resources::error::ResourceError;

/// The raw text of one document, addressed by id.
pub struct DocumentResource;

impl DocumentResource {
    /// Name of the template placeholder holding the document id.
    pub const DOC_ID_PARAM: &'static str = "doc_id";
}

impl ResourceTemplateDefinition for DocumentResource {
    const URI_TEMPLATE: &'static str = "docs://documents/{doc_id}";
    const NAME: &'static str = "Document";
    const TITLE: &'static str = "Document Contents";
    const DESCRIPTION: &'static str = "Raw text of a document, addressed by its id";
    const MIME_TYPE: &'static str = "text/plain";

    fn read(
        params: &HashMap<String, String>,
        store: &DocumentStore,
    ) -> Result<String, ResourceError> {
        let doc_id = params
            .get(Self::DOC_ID_PARAM)
            .ok_or_else(|| ResourceError::not_found(Self::URI_TEMPLATE))?;
        Ok(store.get(doc_id)?)
    }
}
