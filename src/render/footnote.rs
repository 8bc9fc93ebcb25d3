//! Footnote index assignment and body caching.

use std::collections::HashMap;

use crate::model::Document;

/// A registered footnote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteEntry {
    /// 1-based display index
    pub index: usize,

    /// Source footnote id
    pub id: String,

    /// Rendered body text
    pub text: String,
}

/// Assigns footnote indices in first-encounter order.
///
/// Each footnote body is rendered once, on first reference; repeat
/// references reuse the assigned index.
#[derive(Debug, Default)]
pub struct FootnoteRegistry {
    indices: HashMap<String, usize>,
    entries: Vec<FootnoteEntry>,
}

impl FootnoteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference to `id` and return its `[^n]` marker.
    pub fn reference(&mut self, id: &str, doc: &Document) -> String {
        format!("[^{}]", self.register(id, doc))
    }

    /// Register a reference to `id` and return its index.
    pub fn register(&mut self, id: &str, doc: &Document) -> usize {
        if let Some(&index) = self.indices.get(id) {
            return index;
        }

        let index = self.entries.len() + 1;
        let text = match doc.footnote(id) {
            Some(footnote) => footnote.plain_text(),
            None => {
                log::debug!("unknown footnote id {:?}, rendering empty body", id);
                String::new()
            }
        };

        self.indices.insert(id.to_string(), index);
        self.entries.push(FootnoteEntry {
            index,
            id: id.to_string(),
            text,
        });
        index
    }

    /// Index previously assigned to `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.indices.get(id).copied()
    }

    /// Registered footnotes, ascending by index.
    pub fn entries(&self) -> &[FootnoteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
