//! List-item prefixes and ordinal numbering.

use std::collections::HashMap;
use std::fmt;

use crate::model::{Bullet, Document};

/// Marker for unordered items and ordered items with a non-decimal glyph.
const BULLET_MARKER: &str = "- ";

/// Indentation per nesting level.
const INDENT: &str = "  ";

/// A computed list prefix: indentation depth plus marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListPrefix {
    /// Nesting depth; each level renders as two spaces
    pub depth: usize,

    /// `"- "`, `"N. "`, or empty when the paragraph is not a list item
    pub marker: String,
}

impl ListPrefix {
    /// True when the paragraph is not a list item.
    pub fn is_empty(&self) -> bool {
        self.marker.is_empty()
    }

    /// Leading indentation string.
    pub fn indent(&self) -> String {
        INDENT.repeat(self.depth)
    }
}

impl fmt::Display for ListPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.indent(), self.marker)
    }
}

/// Per-conversion ordinal counters, keyed by list id.
///
/// Counters are keyed by list id alone, not by `(list id, nesting level)`:
/// a nested ordered sub-list sharing its parent's id continues the parent's
/// numbering.
#[derive(Debug, Default)]
pub struct ListNumbering {
    counters: HashMap<String, u32>,
}

impl ListNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the prefix for a paragraph's bullet, advancing the list's
    /// counter when the level uses a decimal glyph.
    pub fn prefix(&mut self, bullet: Option<&Bullet>, doc: &Document) -> ListPrefix {
        let Some(list_id) = bullet.and_then(|b| b.list_id.as_deref()) else {
            return ListPrefix::default();
        };
        let depth = bullet.and_then(|b| b.nesting_level).unwrap_or(0) as usize;

        if !doc.lists.contains_key(list_id) {
            log::debug!("unknown list id {:?}, using bullet marker", list_id);
        }

        let is_decimal = doc
            .glyph_type(list_id, depth)
            .is_some_and(|glyph| glyph.contains("DECIMAL"));

        let marker = if is_decimal {
            let ordinal = self.counters.entry(list_id.to_string()).or_insert(1);
            let marker = format!("{}. ", ordinal);
            *ordinal += 1;
            marker
        } else {
            BULLET_MARKER.to_string()
        };

        ListPrefix { depth, marker }
    }

    /// The ordinal the next decimal item of `list_id` will receive.
    pub fn next_ordinal(&self, list_id: &str) -> u32 {
        self.counters.get(list_id).copied().unwrap_or(1)
    }
}
