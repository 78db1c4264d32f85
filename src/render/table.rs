//! Table rendering.

use crate::model::{Table, TableRow};

use super::sanitize::sanitizer;
use super::OutputMode;

/// Render every table in the given mode.
///
/// HTML tables are concatenated without separator; text tables are joined
/// with a blank line. Tables without renderable rows contribute nothing,
/// so the result is empty when no table renders.
pub fn render_tables(tables: &[Table], mode: OutputMode) -> String {
    match mode {
        OutputMode::Html => tables.iter().filter_map(table_to_html).collect(),
        OutputMode::PlainText => tables
            .iter()
            .filter_map(table_to_text)
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Render a table as `<table>`; row 0 uses `<th>` cells.
pub fn table_to_html(table: &Table) -> Option<String> {
    if table.is_empty() {
        return None;
    }

    let mut output = String::from("<table>");
    for (index, row) in table.rows.iter().enumerate() {
        render_html_row(&mut output, row, index == 0);
    }
    output.push_str("</table>");
    Some(output)
}

fn render_html_row(output: &mut String, row: &TableRow, is_header: bool) {
    let tag = if is_header { "th" } else { "td" };
    let sanitizer = sanitizer();

    output.push_str("<tr>");
    for cell in &row.cells {
        output.push('<');
        output.push_str(tag);
        output.push('>');
        output.push_str(&sanitizer.sanitize(&cell.text, true));
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }
    output.push_str("</tr>");
}

/// Render a table as pipe-delimited lines.
///
/// Empty cells are omitted and rows without any text are dropped; a
/// table without rows left renders as `None`.
pub fn table_to_text(table: &Table) -> Option<String> {
    let sanitizer = sanitizer();
    let lines: Vec<String> = table
        .rows
        .iter()
        .filter_map(|row| {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| sanitizer.sanitize(&cell.text, false))
                .filter(|text| !text.is_empty())
                .collect();
            if cells.is_empty() {
                None
            } else {
                Some(cells.join(" | "))
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
