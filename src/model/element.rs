//! Block-level structural elements.

use super::{FootnoteReference, Paragraph, Table};
use serde::de::IgnoredAny;
use serde::Deserialize;

/// One top-level block of a document body.
///
/// On the wire exactly one of several optional keys is populated per
/// element. Decoding checks them in a fixed order and falls back to
/// `Unknown` so new element kinds never break a conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawStructuralElement")]
pub enum StructuralElement {
    /// A paragraph of inline content
    Paragraph(Paragraph),

    /// A table
    Table(Table),

    /// A horizontal rule
    HorizontalRule,

    /// A table of contents; never expanded
    TableOfContents,

    /// A bare footnote reference at block level
    FootnoteReference(FootnoteReference),

    /// Section breaks and any element kind not modelled here
    Unknown,
}

impl StructuralElement {
    /// The paragraph, if this element is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            StructuralElement::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    /// Short name of the element kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            StructuralElement::Paragraph(_) => "paragraph",
            StructuralElement::Table(_) => "table",
            StructuralElement::HorizontalRule => "horizontal_rule",
            StructuralElement::TableOfContents => "table_of_contents",
            StructuralElement::FootnoteReference(_) => "footnote_reference",
            StructuralElement::Unknown => "unknown",
        }
    }
}

impl From<Paragraph> for StructuralElement {
    fn from(paragraph: Paragraph) -> Self {
        StructuralElement::Paragraph(paragraph)
    }
}

impl From<Table> for StructuralElement {
    fn from(table: Table) -> Self {
        StructuralElement::Table(table)
    }
}

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawStructuralElement {
    paragraph: Option<Paragraph>,
    table: Option<Table>,
    horizontal_rule: Option<IgnoredAny>,
    table_of_contents: Option<IgnoredAny>,
    footnote_reference: Option<FootnoteReference>,
}

impl From<RawStructuralElement> for StructuralElement {
    fn from(raw: RawStructuralElement) -> Self {
        if let Some(paragraph) = raw.paragraph {
            StructuralElement::Paragraph(paragraph)
        } else if let Some(table) = raw.table {
            StructuralElement::Table(table)
        } else if raw.horizontal_rule.is_some() {
            StructuralElement::HorizontalRule
        } else if raw.table_of_contents.is_some() {
            StructuralElement::TableOfContents
        } else if let Some(reference) = raw.footnote_reference {
            StructuralElement::FootnoteReference(reference)
        } else {
            StructuralElement::Unknown
        }
    }
}
