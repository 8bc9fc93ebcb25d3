//! Document stores: where fully materialized documents come from.
//!
//! Retrieval is a separate step from conversion. A store hands back a
//! complete [`Document`] or an error; the converter is never invoked with a
//! partial document.
//!
//! # Example
//!
//! ```
//! use ungdoc::model::{Document, Paragraph};
//! use ungdoc::store::{DocumentStore, MemoryStore};
//!
//! let mut doc = Document::new("Notes");
//! doc.push_paragraph(Paragraph::with_text("Hello"));
//!
//! let mut store = MemoryStore::new();
//! store.insert("doc-1", doc);
//!
//! let fetched = store.fetch("doc-1").unwrap();
//! assert_eq!(fetched.title, "Notes");
//! assert!(store.fetch("doc-2").is_err());
//! ```

mod directory;

pub use directory::DirectoryStore;

use crate::error::{Error, Result};
use crate::model::Document;
use std::collections::HashMap;

/// Trait for document sources.
///
/// Implement this trait to fetch documents from an API, a cache, or disk.
pub trait DocumentStore: Send + Sync {
    /// Get the name of this store, used in logs.
    fn name(&self) -> &str;

    /// Fetch the complete document with the given id.
    fn fetch(&self, id: &str) -> Result<Document>;

    /// Check whether a document exists without decoding it.
    fn contains(&self, id: &str) -> bool {
        self.fetch(id).is_ok()
    }
}

/// In-memory store keyed by document id.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, Document>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub fn insert(&mut self, id: impl Into<String>, doc: Document) {
        self.documents.insert(id.into(), doc);
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Stored document ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.documents.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn fetch(&self, id: &str) -> Result<Document> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| Error::DocumentNotFound(id.to_string()))
    }

    fn contains(&self, id: &str) -> bool {
        self.documents.contains_key(id)
    }
}
