//! Pipe-table rendering.

use crate::model::Table;

/// Render a table as a Markdown pipe table.
///
/// A `---` separator follows the first row, sized to that row's cell count.
/// Each row is rendered with its own cell count; ragged tables are not
/// padded. A table without rows renders as an empty string.
pub fn render_table(table: &Table) -> String {
    let mut lines = Vec::with_capacity(table.row_count() + 1);

    for (i, row) in table.table_rows.iter().enumerate() {
        let mut line = String::from("|");
        for cell in &row.table_cells {
            line.push_str(&format!(" {} |", cell.plain_text()));
        }
        lines.push(line);

        if i == 0 {
            lines.push(format!("|{}", " --- |".repeat(row.cell_count())));
        }
    }

    lines.join("\n")
}
