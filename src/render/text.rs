//! Plain text extraction.

use crate::model::{Document, StructuralElement};

use super::{CleanupPipeline, ConvertedDocument, RenderOptions};

/// Extract plain text from a document.
///
/// Concatenates the text runs of every top-level paragraph, in body order,
/// with no Markdown markup. Tables, images and footnotes are not included.
pub fn to_text(doc: &Document, options: &RenderOptions) -> ConvertedDocument {
    let mut output: String = doc
        .content()
        .iter()
        .filter_map(StructuralElement::as_paragraph)
        .map(|p| p.plain_text())
        .collect();

    if let Some(ref cleanup_options) = options.cleanup {
        let pipeline = CleanupPipeline::new(cleanup_options.clone());
        output = pipeline.process(&output);
    }

    ConvertedDocument::new(doc.title.clone(), output.trim())
}
