//! Conversion output with optional statistics.

use serde::{Deserialize, Serialize};

/// A converted document: title plus rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertedDocument {
    /// Document title
    pub title: String,

    /// Rendered content (Markdown or plain text)
    pub content: String,
}

impl ConvertedDocument {
    /// Create a new converted document.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Document title
    pub title: String,

    /// The rendered content
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(document: ConvertedDocument, stats: ExtractionStats) -> Self {
        Self {
            title: document.title,
            content: document.content,
            stats,
        }
    }

    /// Drop the statistics, keeping title and content.
    pub fn into_document(self) -> ConvertedDocument {
        ConvertedDocument {
            title: self.title,
            content: self.content,
        }
    }
}

/// Statistics collected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of plain paragraphs emitted
    pub paragraph_count: u32,

    /// Number of headings emitted
    pub heading_count: u32,

    /// Number of list items emitted
    pub list_item_count: u32,

    /// Number of tables rendered
    pub table_count: u32,

    /// Number of inline images resolved
    pub image_count: u32,

    /// Number of equations rendered
    pub equation_count: u32,

    /// Number of distinct footnotes referenced
    pub footnote_count: u32,

    /// Number of horizontal rules
    pub horizontal_rule_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    pub fn add_table(&mut self) {
        self.table_count += 1;
    }

    pub fn add_equation(&mut self) {
        self.equation_count += 1;
    }

    pub fn add_horizontal_rule(&mut self) {
        self.horizontal_rule_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.paragraph_count += other.paragraph_count;
        self.heading_count += other.heading_count;
        self.list_item_count += other.list_item_count;
        self.table_count += other.table_count;
        self.image_count += other.image_count;
        self.equation_count += other.equation_count;
        self.footnote_count += other.footnote_count;
        self.horizontal_rule_count += other.horizontal_rule_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
