//! Table types.

use super::{Paragraph, StructuralElement};
use serde::Deserialize;

/// A table structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Table {
    /// Row count as reported by the source; informational only
    pub rows: Option<u32>,

    /// Column count as reported by the source; informational only
    pub columns: Option<u32>,

    /// Rows in the table
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table of single-paragraph cells from plain strings.
    pub fn from_rows<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for row in rows {
            table.add_row(TableRow::new(
                row.into_iter().map(TableCell::with_text).collect(),
            ));
        }
        table
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.table_rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableRow {
    /// Cells in the row
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { table_cells: cells }
    }

    /// Number of cells in this row.
    pub fn cell_count(&self) -> usize {
        self.table_cells.len()
    }
}

/// A table cell holding block content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableCell {
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell holding one paragraph of text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![StructuralElement::Paragraph(Paragraph::with_text(text))],
        }
    }

    /// Trimmed text of each paragraph block, concatenated.
    ///
    /// Nested tables and other non-paragraph blocks are not expanded.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .filter_map(StructuralElement::as_paragraph)
            .map(|p| p.plain_text().trim().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_rows() {
        let table = Table::from_rows([["a", "b"], ["c", "d"]]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.table_rows[1].table_cells[0].plain_text(), "c");
    }

    #[test]
    fn test_cell_text_skips_nested_tables() {
        let cell: TableCell = serde_json::from_value(json!({
            "content": [
                { "paragraph": { "elements": [ { "textRun": { "content": " left \n" } } ] } },
                { "table": { "tableRows": [ { "tableCells": [ { "content": [
                    { "paragraph": { "elements": [ { "textRun": { "content": "inner" } } ] } }
                ] } ] } ] } },
                { "paragraph": { "elements": [ { "textRun": { "content": "right\n" } } ] } }
            ]
        }))
        .unwrap();

        assert_eq!(cell.plain_text(), "leftright");
    }
}
