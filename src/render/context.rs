//! Per-conversion rendering state.

use crate::model::Document;

use super::{FootnoteRegistry, ListNumbering};

/// Mutable state threaded through one conversion.
///
/// Created fresh for every call and dropped at the end, so independent
/// conversions never share counters or footnote indices.
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// The document being converted
    pub doc: &'a Document,

    /// List ordinal counters
    pub lists: ListNumbering,

    /// Footnote index map and text cache
    pub footnotes: FootnoteRegistry,

    /// Inline images resolved so far
    pub images: u32,
}

impl<'a> RenderContext<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            lists: ListNumbering::new(),
            footnotes: FootnoteRegistry::new(),
            images: 0,
        }
    }
}
