//! Inline rendering of a paragraph's elements.

use crate::model::{Paragraph, ParagraphElement};

use super::RenderContext;

/// Render a paragraph's inline elements to Markdown text (untrimmed).
///
/// Text runs are appended verbatim. Images are emitted as standalone
/// blocks even when referenced inline. Footnote references become `[^n]`.
pub fn render_paragraph_text(paragraph: &Paragraph, ctx: &mut RenderContext<'_>) -> String {
    let doc = ctx.doc;
    let mut output = String::new();

    for element in &paragraph.elements {
        match element {
            ParagraphElement::TextRun(run) => output.push_str(&run.content),
            ParagraphElement::InlineObject(object) => {
                let Some(id) = object.inline_object_id.as_deref() else {
                    continue;
                };
                match doc.inline_image_uri(id) {
                    Some(uri) => {
                        ctx.images += 1;
                        output.push_str(&format!("\n\n![]({})\n\n", uri));
                    }
                    None => log::debug!("inline object {:?} has no image URI", id),
                }
            }
            ParagraphElement::FootnoteReference(reference) => {
                if let Some(id) = reference.footnote_id.as_deref() {
                    output.push_str(&ctx.footnotes.reference(id, doc));
                }
            }
            // Equations are rendered at the paragraph level
            ParagraphElement::Equation(_) | ParagraphElement::Other => {}
        }
    }

    output
}
