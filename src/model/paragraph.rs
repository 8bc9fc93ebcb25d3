//! Paragraph and inline-level types.

use serde::Deserialize;

/// A paragraph of inline content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Paragraph {
    /// Inline elements in the paragraph
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style
    pub paragraph_style: Option<ParagraphStyle>,

    /// List membership if this paragraph is a list item
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph (`HEADING_1` through `HEADING_6`).
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Self::with_text(text).with_style(format!("HEADING_{}", level.clamp(1, 6)))
    }

    /// Create a list item paragraph.
    pub fn list_item(text: impl Into<String>, list_id: impl Into<String>, nesting_level: u32) -> Self {
        let mut p = Self::with_text(text);
        p.bullet = Some(Bullet {
            list_id: Some(list_id.into()),
            nesting_level: Some(nesting_level),
        });
        p
    }

    /// Set the named style.
    pub fn with_style(mut self, named_style_type: impl Into<String>) -> Self {
        self.paragraph_style = Some(ParagraphStyle {
            named_style_type: Some(named_style_type.into()),
        });
        self
    }

    /// Add plain text to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.elements.push(ParagraphElement::TextRun(TextRun {
            content: text.into(),
        }));
    }

    /// Add an inline element.
    pub fn add_element(&mut self, element: ParagraphElement) {
        self.elements.push(element);
    }

    /// Named style of the paragraph, e.g. `HEADING_2` or `NORMAL_TEXT`.
    pub fn named_style_type(&self) -> Option<&str> {
        self.paragraph_style
            .as_ref()
            .and_then(|s| s.named_style_type.as_deref())
    }

    /// The first equation carried by this paragraph.
    pub fn equation(&self) -> Option<&Equation> {
        self.elements.iter().find_map(|e| match e {
            ParagraphElement::Equation(eq) => Some(eq),
            _ => None,
        })
    }

    /// Concatenated text of all text runs.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| match e {
                ParagraphElement::TextRun(run) => Some(run.content.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.bullet.as_ref().is_some_and(|b| b.list_id.is_some())
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParagraphStyle {
    pub named_style_type: Option<String>,
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bullet {
    /// Id into the document's list table
    pub list_id: Option<String>,

    /// Nesting depth (0 = top level)
    pub nesting_level: Option<u32>,
}

/// Inline content within a paragraph.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawParagraphElement")]
pub enum ParagraphElement {
    /// A run of text
    TextRun(TextRun),

    /// A reference to an embedded object
    InlineObject(InlineObjectElement),

    /// An equation
    Equation(Equation),

    /// A footnote reference
    FootnoteReference(FootnoteReference),

    /// Page breaks, auto text and any kind not modelled here
    Other,
}

/// A run of text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextRun {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineObjectElement {
    pub inline_object_id: Option<String>,
}

/// An equation; the payload is opaque source encoding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Equation {
    pub equation: Option<String>,
}

/// A reference to an entry of the document's footnote table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FootnoteReference {
    pub footnote_id: Option<String>,
    /// Number as displayed by the source editor; informational only
    pub footnote_number: Option<String>,
}

impl FootnoteReference {
    pub fn new(footnote_id: impl Into<String>) -> Self {
        Self {
            footnote_id: Some(footnote_id.into()),
            footnote_number: None,
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawParagraphElement {
    text_run: Option<TextRun>,
    inline_object_element: Option<InlineObjectElement>,
    equation: Option<Equation>,
    footnote_reference: Option<FootnoteReference>,
}

impl From<RawParagraphElement> for ParagraphElement {
    fn from(raw: RawParagraphElement) -> Self {
        if let Some(run) = raw.text_run {
            ParagraphElement::TextRun(run)
        } else if let Some(object) = raw.inline_object_element {
            ParagraphElement::InlineObject(object)
        } else if let Some(equation) = raw.equation {
            ParagraphElement::Equation(equation)
        } else if let Some(reference) = raw.footnote_reference {
            ParagraphElement::FootnoteReference(reference)
        } else {
            ParagraphElement::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::with_text("Hello ");
        p.add_element(ParagraphElement::InlineObject(InlineObjectElement {
            inline_object_id: Some("img".to_string()),
        }));
        p.add_text("world");

        assert_eq!(p.plain_text(), "Hello world");
    }

    #[test]
    fn test_heading_style() {
        let h = Paragraph::heading("Title", 9);
        assert_eq!(h.named_style_type(), Some("HEADING_6"));
    }

    #[test]
    fn test_decode_paragraph() {
        let p: Paragraph = serde_json::from_value(json!({
            "elements": [
                { "startIndex": 1, "textRun": { "content": "Sum ", "textStyle": {} } },
                { "equation": { "equation": "x^2" } },
                { "pageBreak": {} },
                { "footnoteReference": { "footnoteId": "f1", "footnoteNumber": "1" } }
            ],
            "paragraphStyle": { "namedStyleType": "NORMAL_TEXT", "direction": "LEFT_TO_RIGHT" },
            "bullet": { "listId": "kix.1", "nestingLevel": 2 }
        }))
        .unwrap();

        assert_eq!(p.elements.len(), 4);
        assert!(matches!(p.elements[2], ParagraphElement::Other));
        assert_eq!(p.named_style_type(), Some("NORMAL_TEXT"));
        assert_eq!(p.equation().and_then(|e| e.equation.as_deref()), Some("x^2"));
        assert!(p.is_list_item());
        assert_eq!(p.bullet.as_ref().and_then(|b| b.nesting_level), Some(2));
    }

    #[test]
    fn test_bullet_without_list_id() {
        let p: Paragraph = serde_json::from_value(json!({
            "elements": [],
            "bullet": { "nestingLevel": 1 }
        }))
        .unwrap();
        assert!(!p.is_list_item());
    }
}
