//! Document-specific error types.

use thiserror::Error;

/// Errors that can occur while accessing the document registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// No document is registered under the given id.
    #[error("Doc with id {0} not found.")]
    NotFound(String),
}

impl DocumentError {
    /// Create a new "not found" error.
    pub fn not_found(doc_id: impl Into<String>) -> Self {
        Self::NotFound(doc_id.into())
    }

    /// The document id this error refers to.
    pub fn doc_id(&self) -> &str {
        match self {
            Self::NotFound(doc_id) => doc_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DocumentError::not_found("missing.md");
        assert_eq!(err.to_string(), "Doc with id missing.md not found.");
        assert_eq!(err.doc_id(), "missing.md");
    }
}
