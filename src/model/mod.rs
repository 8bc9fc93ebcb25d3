//! Document model types for structured rich-text documents.
//!
//! This module mirrors the JSON shape returned by a rich-text document API
//! (Google Docs `documents.get`). Every field is optional on the wire; the
//! "which key is populated" element shapes are decoded once, at the JSON
//! boundary, into closed sum types with an `Unknown`/`Other` variant.

mod document;
mod element;
mod paragraph;
mod table;

pub use document::{
    Body, Document, EmbeddedObject, Footnote, ImageProperties, InlineObject,
    InlineObjectProperties, ListDefinition, ListProperties, NestingLevel,
};
pub use element::StructuralElement;
pub use paragraph::{
    Bullet, Equation, FootnoteReference, InlineObjectElement, Paragraph, ParagraphElement,
    ParagraphStyle, TextRun,
};
pub use table::{Table, TableCell, TableRow};
