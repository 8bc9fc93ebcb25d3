//! Document-level types and the side tables elements refer into.

use super::{Paragraph, StructuralElement};
use serde::Deserialize;
use std::collections::HashMap;

/// A fully materialized document.
///
/// Read-only for the duration of a conversion. Unknown ids looked up
/// through the side tables resolve to `None` rather than failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    /// Document title
    pub title: String,

    /// Identifier assigned by the document API
    pub document_id: Option<String>,

    /// Document body
    pub body: Body,

    /// Embedded objects (images) referenced from paragraphs
    pub inline_objects: HashMap<String, InlineObject>,

    /// List definitions keyed by list id
    pub lists: HashMap<String, ListDefinition>,

    /// Footnote bodies keyed by footnote id
    pub footnotes: HashMap<String, Footnote>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Body content in document order.
    pub fn content(&self) -> &[StructuralElement] {
        &self.body.content
    }

    /// Append a structural element to the body.
    pub fn push(&mut self, element: StructuralElement) {
        self.body.content.push(element);
    }

    /// Append a paragraph to the body.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.push(StructuralElement::Paragraph(paragraph));
    }

    /// Register an inline image under the given object id.
    pub fn add_inline_image(&mut self, id: impl Into<String>, uri: impl Into<String>) {
        self.inline_objects.insert(id.into(), InlineObject::image(uri));
    }

    /// Register a list definition.
    pub fn add_list(&mut self, id: impl Into<String>, list: ListDefinition) {
        self.lists.insert(id.into(), list);
    }

    /// Register a footnote body.
    pub fn add_footnote(&mut self, id: impl Into<String>, footnote: Footnote) {
        self.footnotes.insert(id.into(), footnote);
    }

    /// Resolve an inline object id to its image URI.
    pub fn inline_image_uri(&self, id: &str) -> Option<&str> {
        self.inline_objects.get(id).and_then(InlineObject::content_uri)
    }

    /// Glyph type configured for a list at the given nesting depth.
    pub fn glyph_type(&self, list_id: &str, nesting_level: usize) -> Option<&str> {
        self.lists
            .get(list_id)
            .and_then(|list| list.glyph_type(nesting_level))
    }

    /// Look up a footnote body.
    pub fn footnote(&self, id: &str) -> Option<&Footnote> {
        self.footnotes.get(id)
    }

    /// Check if the body has no content.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }

    /// Convert title and id to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        lines.push(format!("title: \"{}\"", escape_yaml(&self.title)));
        if let Some(ref id) = self.document_id {
            lines.push(format!("document_id: \"{}\"", escape_yaml(id)));
        }

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// The main body segment of a document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Body {
    /// Structural elements in document order
    pub content: Vec<StructuralElement>,
}

/// An embedded, non-text object.
///
/// The API nests the image under `inlineObjectProperties.embeddedObject`;
/// a flat `imageProperties` is accepted as well.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineObject {
    pub inline_object_properties: Option<InlineObjectProperties>,
    pub image_properties: Option<ImageProperties>,
}

impl InlineObject {
    /// Create an image object pointing at `uri`.
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            inline_object_properties: Some(InlineObjectProperties {
                embedded_object: Some(EmbeddedObject {
                    image_properties: Some(ImageProperties {
                        content_uri: Some(uri.into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
            }),
            image_properties: None,
        }
    }

    /// The URI the image content can be fetched from, if any.
    pub fn content_uri(&self) -> Option<&str> {
        self.inline_object_properties
            .as_ref()
            .and_then(|p| p.embedded_object.as_ref())
            .and_then(|e| e.image_properties.as_ref())
            .and_then(|i| i.content_uri.as_deref())
            .or_else(|| {
                self.image_properties
                    .as_ref()
                    .and_then(|i| i.content_uri.as_deref())
            })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineObjectProperties {
    pub embedded_object: Option<EmbeddedObject>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmbeddedObject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_properties: Option<ImageProperties>,
}

/// Image location properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageProperties {
    /// Short-lived URI of the rendered image
    pub content_uri: Option<String>,
    /// URI the image was originally inserted from
    pub source_uri: Option<String>,
}

/// A list definition: one glyph configuration per nesting depth.
///
/// The API nests levels under `listProperties`; a flat `nestingLevels` is
/// accepted as well.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDefinition {
    pub list_properties: Option<ListProperties>,
    pub nesting_levels: Vec<NestingLevel>,
}

impl ListDefinition {
    /// Create a list from per-level glyph types.
    pub fn with_glyph_types<I, S>(glyph_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            list_properties: Some(ListProperties {
                nesting_levels: glyph_types
                    .into_iter()
                    .map(|g| NestingLevel {
                        glyph_type: Some(g.into()),
                        glyph_symbol: None,
                    })
                    .collect(),
            }),
            nesting_levels: Vec::new(),
        }
    }

    /// A numbered list with decimal glyphs at the first three levels.
    pub fn numbered() -> Self {
        Self::with_glyph_types(["DECIMAL", "DECIMAL", "DECIMAL"])
    }

    /// A bulleted list (no glyph type at any level).
    pub fn bulleted() -> Self {
        Self {
            list_properties: Some(ListProperties {
                nesting_levels: vec![
                    NestingLevel {
                        glyph_type: None,
                        glyph_symbol: Some("●".to_string()),
                    };
                    3
                ],
            }),
            nesting_levels: Vec::new(),
        }
    }

    /// Per-depth level configuration.
    pub fn nesting_levels(&self) -> &[NestingLevel] {
        match &self.list_properties {
            Some(props) if !props.nesting_levels.is_empty() => &props.nesting_levels,
            _ => &self.nesting_levels,
        }
    }

    /// Glyph type at `level`, or `None` when absent or out of range.
    pub fn glyph_type(&self, level: usize) -> Option<&str> {
        self.nesting_levels()
            .get(level)
            .and_then(|l| l.glyph_type.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListProperties {
    pub nesting_levels: Vec<NestingLevel>,
}

/// Glyph configuration for one nesting depth.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NestingLevel {
    /// Numbering kind, e.g. `DECIMAL`, `ALPHA`, `ROMAN`
    pub glyph_type: Option<String>,
    /// Literal bullet symbol for unordered levels
    pub glyph_symbol: Option<String>,
}

/// Footnote body content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footnote {
    pub footnote_id: Option<String>,
    pub content: Vec<StructuralElement>,
}

impl Footnote {
    /// Create a footnote holding a single paragraph of text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            footnote_id: None,
            content: vec![StructuralElement::Paragraph(Paragraph::with_text(text))],
        }
    }

    /// Concatenated paragraph text, trimmed.
    pub fn plain_text(&self) -> String {
        let text: String = self
            .content
            .iter()
            .filter_map(StructuralElement::as_paragraph)
            .map(Paragraph::plain_text)
            .collect();
        text.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_new() {
        let doc = Document::new("Notes");
        assert_eq!(doc.title, "Notes");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_frontmatter() {
        let mut doc = Document::new("Quarterly \"Plan\"");
        doc.document_id = Some("1AbC".to_string());

        let yaml = doc.to_yaml_frontmatter();
        assert_eq!(
            yaml,
            "---\ntitle: \"Quarterly \\\"Plan\\\"\"\ndocument_id: \"1AbC\"\n---\n"
        );
    }

    #[test]
    fn test_decode_missing_fields() {
        let doc: Document = serde_json::from_value(json!({})).unwrap();
        assert_eq!(doc.title, "");
        assert!(doc.is_empty());
        assert!(doc.lists.is_empty());
    }

    #[test]
    fn test_inline_image_nested_and_flat() {
        let doc: Document = serde_json::from_value(json!({
            "inlineObjects": {
                "nested": {
                    "inlineObjectProperties": {
                        "embeddedObject": {
                            "imageProperties": { "contentUri": "https://x/a.png" }
                        }
                    }
                },
                "flat": { "imageProperties": { "contentUri": "https://x/b.png" } },
                "empty": {}
            }
        }))
        .unwrap();

        assert_eq!(doc.inline_image_uri("nested"), Some("https://x/a.png"));
        assert_eq!(doc.inline_image_uri("flat"), Some("https://x/b.png"));
        assert_eq!(doc.inline_image_uri("empty"), None);
        assert_eq!(doc.inline_image_uri("missing"), None);
    }

    #[test]
    fn test_list_glyph_lookup() {
        let doc: Document = serde_json::from_value(json!({
            "lists": {
                "L1": { "listProperties": { "nestingLevels": [
                    { "glyphType": "DECIMAL" },
                    { "glyphSymbol": "○" }
                ] } },
                "L2": { "nestingLevels": [ { "glyphType": "UPPER_ALPHA" } ] }
            }
        }))
        .unwrap();

        assert_eq!(doc.glyph_type("L1", 0), Some("DECIMAL"));
        assert_eq!(doc.glyph_type("L1", 1), None);
        assert_eq!(doc.glyph_type("L1", 7), None);
        assert_eq!(doc.glyph_type("L2", 0), Some("UPPER_ALPHA"));
        assert_eq!(doc.glyph_type("nope", 0), None);
    }

    #[test]
    fn test_footnote_plain_text() {
        let footnote: Footnote = serde_json::from_value(json!({
            "footnoteId": "f1",
            "content": [
                { "paragraph": { "elements": [ { "textRun": { "content": " first " } } ] } },
                { "sectionBreak": {} },
                { "paragraph": { "elements": [ { "textRun": { "content": "second\n" } } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(footnote.plain_text(), "first second");
    }
}
