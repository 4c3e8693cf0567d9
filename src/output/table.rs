//! Borderless, left-aligned column rendering.

use super::TableRow;
use comfy_table::presets::NOTHING;
use comfy_table::{Cell, ContentArrangement, Table};

/// Gap between columns
const COLUMN_GAP: u16 = 2;

pub struct TableRenderer;

impl TableRenderer {
    /// Render `header` and `rows`. A row without a column renders an empty cell.
    pub fn render(header: &[&str], rows: &[TableRow]) -> String {
        let mut table = Table::new();
        table
            .load_preset(NOTHING)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(header.iter().map(Cell::new));

        for row in rows {
            table.add_row(header.iter().map(|column| {
                Cell::new(row.get(column).map(String::as_str).unwrap_or_default())
            }));
        }

        for column in table.column_iter_mut() {
            column.set_padding((0, COLUMN_GAP));
        }

        let mut out = String::new();
        for line in table.to_string().lines() {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
