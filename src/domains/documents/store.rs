//! Document store implementation.
//!
//! The `DocumentStore` maps document ids to their current text. Ids are fixed
//! when the store is built and keep their registration order; texts are
//! replaced in place under a single lock, so readers always see either the
//! old or the new text of a document, never a mix.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use tracing::{debug, warn};

use super::error::DocumentError;

/// A named unit of text content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable, case-sensitive identifier.
    pub id: String,

    /// Current content. No format is enforced.
    pub text: String,
}

impl Document {
    /// Create a new document.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// The in-memory document registry.
///
/// Shared between handlers behind an `Arc`; all methods take `&self`.
#[derive(Debug)]
pub struct DocumentStore {
    /// Document ids in registration order. Never changes after construction.
    ids: Vec<String>,

    /// Current text of every document in `ids`.
    texts: RwLock<HashMap<String, String>>,
}

impl DocumentStore {
    /// Build a store from a seed set.
    ///
    /// A repeated id keeps the position of its first occurrence and the text
    /// of its last one.
    pub fn new(documents: impl IntoIterator<Item = Document>) -> Self {
        let mut ids = Vec::new();
        let mut texts = HashMap::new();

        for doc in documents {
            if texts.insert(doc.id.clone(), doc.text).is_some() {
                warn!("Duplicate document id in seed: {}", doc.id);
            } else {
                ids.push(doc.id);
            }
        }

        debug!("Document store created with {} documents", ids.len());

        Self {
            ids,
            texts: RwLock::new(texts),
        }
    }

    /// Get the current text of a document.
    pub fn get(&self, doc_id: &str) -> Result<String, DocumentError> {
        let texts = self.texts.read().unwrap_or_else(PoisonError::into_inner);
        texts
            .get(doc_id)
            .cloned()
            .ok_or_else(|| DocumentError::not_found(doc_id))
    }

    /// Replace the whole text of an existing document.
    ///
    /// Unknown ids are rejected; the store never grows.
    pub fn set(&self, doc_id: &str, text: impl Into<String>) -> Result<(), DocumentError> {
        let mut texts = self.texts.write().unwrap_or_else(PoisonError::into_inner);
        let slot = texts
            .get_mut(doc_id)
            .ok_or_else(|| DocumentError::not_found(doc_id))?;
        *slot = text.into();
        Ok(())
    }

    /// Read-modify-write a document under one write lock.
    ///
    /// Concurrent updates of the same document are applied one after the other.
    pub fn update<F>(&self, doc_id: &str, f: F) -> Result<(), DocumentError>
    where
        F: FnOnce(&str) -> String,
    {
        let mut texts = self.texts.write().unwrap_or_else(PoisonError::into_inner);
        let slot = texts
            .get_mut(doc_id)
            .ok_or_else(|| DocumentError::not_found(doc_id))?;
        let updated = f(slot.as_str());
        *slot = updated;
        Ok(())
    }

    /// All document ids, in registration order.
    pub fn list_ids(&self) -> Vec<String> {
        self.ids.clone()
    }

    /// Whether a document with this id exists.
    pub fn contains(&self, doc_id: &str) -> bool {
        self.ids.iter().any(|id| id == doc_id)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(super::default_documents())
    }
}
