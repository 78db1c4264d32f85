//! Plain text rendering for DOCX documents.

use crate::model::Document;

use super::sanitize::sanitizer;
use super::table::render_tables;
use super::OutputMode;

/// Separator between the paragraph block and the table block.
pub const TABLE_BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Convert the paragraphs of a document to plain text.
///
/// Every non-empty sanitized paragraph becomes one line; lines are joined
/// with a blank line.
pub fn to_text(doc: &Document) -> String {
    let sanitizer = sanitizer();
    doc.paragraphs
        .iter()
        .map(|p| sanitizer.sanitize(&p.text, false))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Convert a document to plain text followed by its tables.
///
/// The blocks are joined with [`TABLE_BLOCK_SEPARATOR`]; an empty block is
/// left out together with the separator.
pub fn to_text_with_tables(doc: &Document) -> String {
    let blocks = [
        to_text(doc),
        render_tables(&doc.tables, OutputMode::PlainText),
    ];
    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join(TABLE_BLOCK_SEPARATOR)
}
