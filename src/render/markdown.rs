//! Markdown rendering for structured documents.

use crate::model::{Document, Paragraph, StructuralElement};

use super::{
    heading_prefix, render_equation, render_paragraph_text, render_table, CleanupPipeline,
    ConvertedDocument, ExtractionStats, RenderContext, RenderOptions, RenderResult,
};

/// Header emitted before footnote definitions.
const FOOTNOTES_HEADER: &str = "## Footnotes";

/// Horizontal rule fragment.
const HORIZONTAL_RULE: &str = "\n---\n";

/// Separator between fragments.
const FRAGMENT_SEPARATOR: &str = "\n\n";

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> ConvertedDocument {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// One output block. List items keep their nesting depth apart from the
/// text so trimming never eats their indentation.
#[derive(Debug)]
struct Fragment {
    depth: usize,
    text: String,
}

impl Fragment {
    fn block(text: impl Into<String>) -> Self {
        Self {
            depth: 0,
            text: text.into(),
        }
    }
}

/// Markdown renderer.
///
/// Walks the body once, in order, and joins the rendered fragments with a
/// blank line. All numbering state lives in a [`RenderContext`] that is
/// created per call.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: ExtractionStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(mut self, doc: &Document) -> ConvertedDocument {
        let content = self.render_internal(doc);
        ConvertedDocument::new(doc.title.clone(), content)
    }

    /// Render a document to Markdown with extraction statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(doc);

        self.stats.count_text(&content);

        RenderResult::new(ConvertedDocument::new(doc.title.clone(), content), self.stats)
    }

    fn render_internal(&mut self, doc: &Document) -> String {
        log::debug!(
            "rendering {:?}: {} body elements",
            doc.title,
            doc.content().len()
        );

        let mut ctx = RenderContext::new(doc);
        let mut fragments = Vec::with_capacity(doc.content().len());

        for element in doc.content() {
            self.render_element(element, &mut ctx, &mut fragments);
        }

        self.render_footnotes(&ctx, &mut fragments);

        if self.options.collect_stats {
            self.stats.image_count += ctx.images;
            self.stats.footnote_count += ctx.footnotes.len() as u32;
        }

        let mut output = assemble(&fragments);

        if self.options.include_frontmatter {
            output = format!("{}\n{}", doc.to_yaml_frontmatter(), output);
        }

        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            output = pipeline.process(&output);
        }

        log::debug!(
            "rendered {:?}: {} fragments, {} footnotes, {} bytes",
            doc.title,
            fragments.len(),
            ctx.footnotes.len(),
            output.len()
        );

        output
    }

    fn render_element(
        &mut self,
        element: &StructuralElement,
        ctx: &mut RenderContext<'_>,
        fragments: &mut Vec<Fragment>,
    ) {
        match element {
            StructuralElement::Paragraph(p) => self.render_paragraph(p, ctx, fragments),
            StructuralElement::Table(t) => {
                if self.options.collect_stats {
                    self.stats.add_table();
                }
                fragments.push(Fragment::block(render_table(t)));
            }
            StructuralElement::HorizontalRule => {
                if self.options.collect_stats {
                    self.stats.add_horizontal_rule();
                }
                fragments.push(Fragment::block(HORIZONTAL_RULE));
            }
            StructuralElement::TableOfContents => {
                fragments.push(Fragment::block(self.options.toc_placeholder.as_str()));
            }
            StructuralElement::FootnoteReference(reference) => {
                match reference.footnote_id.as_deref() {
                    Some(id) => {
                        let marker = ctx.footnotes.reference(id, ctx.doc);
                        fragments.push(Fragment::block(marker));
                    }
                    None => log::debug!("footnote reference without id skipped"),
                }
            }
            StructuralElement::Unknown => {
                log::trace!("skipping unrecognized structural element");
            }
        }
    }

    fn render_paragraph(
        &mut self,
        para: &Paragraph,
        ctx: &mut RenderContext<'_>,
        fragments: &mut Vec<Fragment>,
    ) {
        // An equation owns the whole paragraph
        if let Some(equation) = para.equation() {
            if self.options.collect_stats {
                self.stats.add_equation();
            }
            fragments.push(Fragment::block(render_equation(equation)));
            return;
        }

        let heading = heading_prefix(para.named_style_type());
        let list = ctx.lists.prefix(para.bullet.as_ref(), ctx.doc);
        let text = render_paragraph_text(para, ctx);
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return;
        }

        if !heading.is_empty() {
            if self.options.collect_stats {
                self.stats.add_heading();
            }
            fragments.push(Fragment::block(format!("{} {}", heading, trimmed)));
        } else if !list.is_empty() {
            if self.options.collect_stats {
                self.stats.add_list_item();
            }
            fragments.push(Fragment {
                depth: list.depth,
                text: format!("{}{}", list.marker, trimmed),
            });
        } else {
            if self.options.collect_stats {
                self.stats.add_paragraph();
            }
            fragments.push(Fragment::block(text));
        }
    }

    fn render_footnotes(&self, ctx: &RenderContext<'_>, fragments: &mut Vec<Fragment>) {
        if ctx.footnotes.is_empty() {
            return;
        }

        fragments.push(Fragment::block(FOOTNOTES_HEADER));

        let mut entries: Vec<_> = ctx.footnotes.entries().iter().collect();
        entries.sort_by_key(|entry| entry.index);
        for entry in entries {
            fragments.push(Fragment::block(format!(
                "[^{}]: {}",
                entry.index, entry.text
            )));
        }
    }
}

/// Drop blank fragments, trim the rest, and join with a blank line.
fn assemble(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .map(|f| format!("{}{}", "  ".repeat(f.depth), f.text.trim()))
        .collect::<Vec<_>>()
        .join(FRAGMENT_SEPARATOR)
}
