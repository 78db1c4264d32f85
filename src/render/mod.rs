//! Rendering module for converting documents to text and HTML.
//!
//! The pipeline analyzes font sizes once per document, classifies each
//! paragraph in document order, renders it, and appends rendered tables.

pub mod fonts;
pub mod heading;
mod html;
mod json;
mod options;
pub mod sanitize;
mod structure;
mod table;
mod text;

pub use fonts::{analyze, FontStats, DEFAULT_BASELINE};
pub use heading::{classify, classify_document, ClassifiedParagraph, HeadingLevel, HeadingSignals};
pub use html::{paragraphs_to_html, render_paragraph, to_html, to_html_with, RenderState};
pub use json::{to_json, JsonFormat};
pub use options::{OutputMode, RenderOptions};
pub use sanitize::{escape_html, sanitize, TextSanitizer};
pub use structure::{analyze_structure, StructureSummary};
pub use table::{render_tables, table_to_html, table_to_text};
pub use text::{to_text, to_text_with_tables, TABLE_BLOCK_SEPARATOR};

use crate::model::Document;

/// Convert a document according to the given options.
///
/// Plain text and HTML are never mixed within one call.
pub fn convert(doc: &Document, options: &RenderOptions) -> String {
    let output = match (options.mode, options.include_tables) {
        (OutputMode::PlainText, false) => to_text(doc),
        (OutputMode::PlainText, true) => to_text_with_tables(doc),
        (OutputMode::Html, include_tables) => to_html_with(doc, include_tables),
    };

    log::debug!(
        "Converted document ({:?}, tables: {}): {} chars",
        options.mode,
        options.include_tables,
        output.chars().count()
    );
    output
}
