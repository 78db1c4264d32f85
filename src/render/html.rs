//! Structural HTML rendering for DOCX documents.

use crate::model::Document;

use super::fonts::analyze;
use super::heading::{classify_document, HeadingLevel};
use super::sanitize::escape_html;
use super::table::render_tables;
use super::OutputMode;

/// Fold state threaded through paragraph rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    /// An `<h1>` has already been emitted
    pub h1_used: bool,

    /// Number of the next body paragraph
    pub paragraph_counter: u32,
}

impl RenderState {
    /// Fresh state for one conversion.
    pub fn new() -> Self {
        Self {
            h1_used: false,
            paragraph_counter: 1,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one paragraph and return the next state.
///
/// `text` must already be sanitized and escaped. Empty text renders
/// nothing and leaves the state untouched. Only the first H1 is emitted as
/// `<h1>`; later ones become `<h2>`. Body paragraphs are tagged `<pNN>`
/// with the zero-padded counter, which only body paragraphs advance.
pub fn render_paragraph(
    text: &str,
    level: HeadingLevel,
    state: RenderState,
) -> (Option<String>, RenderState) {
    if text.is_empty() {
        return (None, state);
    }

    match level {
        HeadingLevel::H1 if !state.h1_used => (
            Some(wrap("h1", text)),
            RenderState {
                h1_used: true,
                ..state
            },
        ),
        HeadingLevel::H1 | HeadingLevel::H2 => (Some(wrap("h2", text)), state),
        HeadingLevel::H3 => (Some(wrap("h3", text)), state),
        HeadingLevel::Body => {
            let tag = format!("p{:02}", state.paragraph_counter);
            (
                Some(wrap(&tag, text)),
                RenderState {
                    paragraph_counter: state.paragraph_counter + 1,
                    ..state
                },
            )
        }
    }
}

fn wrap(tag: &str, text: &str) -> String {
    format!("<{}>{}</{}>", tag, text, tag)
}

/// Render the paragraphs of a document as HTML.
pub fn paragraphs_to_html(doc: &Document) -> String {
    let stats = analyze(doc);

    let (output, state) = classify_document(doc, stats.baseline).into_iter().fold(
        (String::new(), RenderState::new()),
        |(mut output, state), paragraph| {
            let text = escape_html(&paragraph.text);
            let (unit, next) = render_paragraph(&text, paragraph.level, state);
            if let Some(unit) = unit {
                output.push_str(&unit);
            }
            (output, next)
        },
    );

    log::debug!(
        "Rendered HTML: {} body paragraphs, h1 emitted: {}",
        state.paragraph_counter - 1,
        state.h1_used
    );
    output
}

/// Convert a document to HTML, optionally followed by its tables.
pub fn to_html_with(doc: &Document, include_tables: bool) -> String {
    let mut output = paragraphs_to_html(doc);
    if include_tables {
        output.push_str(&render_tables(&doc.tables, OutputMode::Html));
    }
    output
}

/// Convert a document to HTML with its tables appended.
pub fn to_html(doc: &Document) -> String {
    to_html_with(doc, true)
}
