//! # ungdoc
//!
//! Convert structured rich-text document JSON (the Google Docs document
//! resource) to Markdown, plain text, and JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ungdoc::{parse_file, render};
//!
//! fn main() -> ungdoc::Result<()> {
//!     // Parse a document resource
//!     let doc = parse_file("document.json")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let converted = render::to_markdown(&doc, &options);
//!     println!("{}", converted.content);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Markdown**: headings, numbered and bulleted lists, tables, inline
//!   images, equations, horizontal rules and footnotes
//! - **Plain text** and **JSON** output
//! - **Document stores**: fetch by id from memory or a directory
//! - **Parallel processing**: Uses Rayon for batches of documents
//! - **Cleanup pipeline**: Text normalization for LLM training data

pub mod convert;
pub mod error;
pub mod model;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use convert::{
    convert_batch, convert_document, convert_from_store, ConvertOptions, ConvertResult,
    OutputFormat,
};
pub use error::{Error, Result};
pub use model::{
    Document, Footnote, ListDefinition, Paragraph, ParagraphElement, StructuralElement, Table,
    TableCell, TableRow, TextRun,
};
pub use render::{
    CleanupOptions, CleanupPreset, ConvertedDocument, ExtractionStats, JsonFormat, RenderOptions,
    RenderResult,
};
pub use store::{DirectoryStore, DocumentStore, MemoryStore};

use std::io::Read;
use std::path::Path;

/// Parse a document from a JSON string.
///
/// # Example
///
/// ```
/// let doc = ungdoc::parse_str(r#"{"title": "Notes", "body": {"content": []}}"#).unwrap();
/// assert_eq!(doc.title, "Notes");
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    parse_value(serde_json::from_str(json)?)
}

/// Parse a document from JSON bytes.
pub fn parse_slice(data: &[u8]) -> Result<Document> {
    parse_value(serde_json::from_slice(data)?)
}

/// Parse a document from a reader.
///
/// # Example
///
/// ```no_run
/// use ungdoc::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    parse_value(serde_json::from_reader(reader)?)
}

/// Parse a document JSON file.
///
/// # Example
///
/// ```no_run
/// use ungdoc::parse_file;
///
/// let doc = parse_file("document.json").unwrap();
/// println!("Elements: {}", doc.content().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let file = std::fs::File::open(path)?;
    parse_reader(std::io::BufReader::new(file))
}

fn parse_value(value: serde_json::Value) -> Result<Document> {
    if !value.is_object() {
        return Err(Error::InvalidDocument(format!(
            "expected a JSON object, found {}",
            json_kind(&value)
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Convert a document to Markdown with default options.
///
/// # Example
///
/// ```
/// use ungdoc::{convert, Document, Paragraph};
///
/// let mut doc = Document::new("Notes");
/// doc.push_paragraph(Paragraph::heading("Title\n", 1));
/// doc.push_paragraph(Paragraph::with_text("Hello\n"));
///
/// let converted = convert(&doc);
/// assert_eq!(converted.title, "Notes");
/// assert_eq!(converted.content, "# Title\n\nHello");
/// ```
pub fn convert(doc: &Document) -> ConvertedDocument {
    render::to_markdown(doc, &RenderOptions::default())
}

/// Convert a document to Markdown with custom options.
pub fn convert_with_options(doc: &Document, options: &RenderOptions) -> ConvertedDocument {
    render::to_markdown(doc, options)
}

/// Convert a document JSON file to Markdown.
///
/// # Example
///
/// ```no_run
/// use ungdoc::to_markdown;
///
/// let markdown = to_markdown("document.json").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(convert(&doc).content)
}

/// Convert a document JSON file to plain text.
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc, options).content)
}

/// Convert a document JSON file to a JSON-wrapped Markdown conversion.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&convert(&doc), format)
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use ungdoc::{CleanupPreset, Ungdoc};
///
/// let markdown = Ungdoc::new()
///     .with_frontmatter()
///     .with_cleanup(CleanupPreset::Standard)
///     .parse("document.json")?
///     .to_markdown();
/// # Ok::<(), ungdoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ungdoc {
    render_options: RenderOptions,
}

impl Ungdoc {
    /// Create a new Ungdoc builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable frontmatter in output.
    pub fn with_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(true);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Set the text emitted for a table of contents.
    pub fn with_toc_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_toc_placeholder(placeholder);
        self
    }

    /// Parse a document JSON file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UngdocResult> {
        let document = parse_file(path)?;
        Ok(self.wrap(document))
    }

    /// Parse a document from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<UngdocResult> {
        let document = parse_str(json)?;
        Ok(self.wrap(document))
    }

    /// Fetch a document from a store.
    pub fn fetch(self, store: &dyn DocumentStore, id: &str) -> Result<UngdocResult> {
        let document = store.fetch(id)?;
        Ok(self.wrap(document))
    }

    fn wrap(self, document: Document) -> UngdocResult {
        UngdocResult {
            document,
            render_options: self.render_options,
        }
    }
}

/// A parsed document together with the options to render it with.
pub struct UngdocResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UngdocResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document, &self.render_options).content
    }

    /// Convert to Markdown with extraction statistics.
    pub fn to_markdown_with_stats(&self) -> RenderResult {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document, &self.render_options).content
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&render::to_markdown(&self.document, &self.render_options), format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
