//! Rendering module for converting documents to various output formats.

mod cleanup;
mod context;
mod equation;
mod footnote;
mod heading;
mod json;
mod list;
mod markdown;
mod options;
mod paragraph;
mod result;
mod table;
mod text;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use context::RenderContext;
pub use equation::render_equation;
pub use footnote::{FootnoteEntry, FootnoteRegistry};
pub use heading::{heading_level, heading_prefix};
pub use json::{to_json, JsonFormat};
pub use list::{ListNumbering, ListPrefix};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::{RenderOptions, DEFAULT_TOC_PLACEHOLDER};
pub use paragraph::render_paragraph_text;
pub use result::{ConvertedDocument, ExtractionStats, RenderResult};
pub use table::render_table;
pub use text::to_text;
