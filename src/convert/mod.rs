//! Conversion front end: output-format dispatch, store retrieval and batches.
//!
//! # Example
//!
//! ```
//! use ungdoc::convert::{convert_from_store, ConvertOptions, OutputFormat};
//! use ungdoc::model::{Document, Paragraph};
//! use ungdoc::store::MemoryStore;
//!
//! fn main() -> ungdoc::Result<()> {
//!     let mut doc = Document::new("Notes");
//!     doc.push_paragraph(Paragraph::heading("Intro\n", 1));
//!
//!     let mut store = MemoryStore::new();
//!     store.insert("notes", doc);
//!
//!     let options = ConvertOptions::new().with_format(OutputFormat::Markdown);
//!     let result = convert_from_store(&store, "notes", &options)?;
//!     assert_eq!(result.content, "# Intro");
//!     Ok(())
//! }
//! ```

use crate::error::Result;
use crate::model::Document;
use crate::render::{self, ExtractionStats, JsonFormat, RenderOptions};
use crate::store::DocumentStore;
use rayon::prelude::*;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Rendering options
    pub render: RenderOptions,

    /// Output format
    pub output_format: OutputFormat,

    /// Layout of JSON output
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set rendering options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render = options;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.render = self.render.with_stats(collect);
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format
    #[default]
    Markdown,

    /// Plain text
    Text,

    /// Markdown conversion wrapped in a JSON object
    Json,
}

impl OutputFormat {
    /// MIME type of this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Source document title
    pub title: String,

    /// Converted content
    pub content: String,

    /// Extraction statistics (if collected)
    pub stats: Option<ExtractionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            stats: None,
            mime_type: OutputFormat::Markdown.mime_type(),
        }
    }

    /// Set extraction statistics.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Convert a document to the configured output format.
///
/// Only JSON output can fail.
pub fn convert_document(doc: &Document, options: &ConvertOptions) -> Result<ConvertResult> {
    let format = options.output_format;
    let collect = options.render.collect_stats;

    let result = match format {
        OutputFormat::Markdown if collect => {
            let rendered = render::to_markdown_with_stats(doc, &options.render);
            ConvertResult::new(rendered.title, rendered.content).with_stats(rendered.stats)
        }
        OutputFormat::Markdown => {
            let converted = render::to_markdown(doc, &options.render);
            ConvertResult::new(converted.title, converted.content)
        }
        OutputFormat::Text => {
            let converted = render::to_text(doc, &options.render);
            ConvertResult::new(converted.title, converted.content)
        }
        OutputFormat::Json if collect => {
            let rendered = render::to_markdown_with_stats(doc, &options.render);
            let json = render::to_json(&rendered, options.json_format)?;
            ConvertResult::new(rendered.title, json).with_stats(rendered.stats)
        }
        OutputFormat::Json => {
            let converted = render::to_markdown(doc, &options.render);
            let json = render::to_json(&converted, options.json_format)?;
            ConvertResult::new(converted.title, json)
        }
    };

    Ok(result.with_mime_type(format.mime_type()))
}

/// Fetch a document from `store` and convert it.
///
/// Retrieval errors are returned as-is; conversion only runs on a
/// successfully fetched document.
pub fn convert_from_store(
    store: &dyn DocumentStore,
    id: &str,
    options: &ConvertOptions,
) -> Result<ConvertResult> {
    log::debug!("fetching {:?} from {} store", id, store.name());
    let doc = store.fetch(id)?;
    convert_document(&doc, options)
}

/// Convert many documents in parallel.
///
/// Results keep the order of `docs`. Each conversion gets its own
/// rendering state.
pub fn convert_batch(docs: &[Document], options: &ConvertOptions) -> Vec<Result<ConvertResult>> {
    docs.par_iter()
        .map(|doc| convert_document(doc, options))
        .collect()
}
