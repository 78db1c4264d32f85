//! # undocx
//!
//! DOCX content extraction library for Rust.
//!
//! This library reads DOCX documents and converts them to sanitized plain
//! text or to an HTML rendering that recovers structure (headings, body
//! paragraphs, tables) from presentational cues such as font size,
//! boldness and centering.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render_html};
//!
//! fn main() -> undocx::Result<()> {
//!     let doc = parse_file("report.docx")?;
//!     println!("{}", render_html(&doc));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Plain text**: control characters stripped, whitespace collapsed
//! - **Heading inference**: baseline font size plus a weighted score over
//!   bold, size and alignment, with at most one `<h1>` per document
//! - **Numbered body paragraphs**: `<p01>`, `<p02>`, ...
//! - **Tables**: pipe-delimited text or `<table>` markup
//! - **Parallel batches**: independent documents converted with Rayon

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_many, ConvertOptions, ConvertResult, DocumentConverter, DocxConverter, OutputFormat,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{Alignment, Document, Paragraph, Table, TableCell, TableRow, TextRun};
pub use parser::DocxParser;
pub use render::{
    FontStats, HeadingLevel, JsonFormat, OutputMode, RenderOptions, StructureSummary,
};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("report.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract the sanitized paragraph text of a document.
///
/// Non-empty paragraphs are separated by a blank line.
pub fn extract_plain_text(doc: &Document) -> String {
    render::to_text(doc)
}

/// Extract paragraph text followed by pipe-delimited tables.
pub fn extract_plain_text_with_tables(doc: &Document) -> String {
    render::to_text_with_tables(doc)
}

/// Render a document as structural HTML, tables appended at the end.
pub fn render_html(doc: &Document) -> String {
    render::to_html(doc)
}

/// Summarize paragraph, heading and table counts and font statistics.
pub fn analyze_structure(doc: &Document) -> StructureSummary {
    render::analyze_structure(doc)
}

/// Parse DOCX bytes and extract plain text.
///
/// Any failure is reported as a single [`Error::Conversion`].
pub fn text_from_bytes(data: &[u8]) -> Result<String> {
    convert_bytes(data, &RenderOptions::plain_text())
}

/// Parse DOCX bytes and extract plain text with tables.
pub fn text_with_tables_from_bytes(data: &[u8]) -> Result<String> {
    convert_bytes(data, &RenderOptions::plain_text().with_tables(true))
}

/// Parse DOCX bytes and render HTML.
pub fn html_from_bytes(data: &[u8]) -> Result<String> {
    convert_bytes(data, &RenderOptions::html())
}

fn convert_bytes(data: &[u8], options: &RenderOptions) -> Result<String> {
    let doc = parse_bytes(data).map_err(Error::into_conversion)?;
    Ok(render::convert(&doc, options))
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let html = Undocx::new()
///     .html()
///     .parse("report.docx")?
///     .to_string();
/// # Ok::<(), undocx::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Undocx {
    render_options: RenderOptions,
}

impl Undocx {
    /// Create a new builder producing plain text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce HTML instead of plain text.
    pub fn html(mut self) -> Self {
        self.render_options = RenderOptions::html();
        self
    }

    /// Include or exclude tables.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.render_options = self.render_options.with_tables(include);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let document = parse_file(path).map_err(Error::into_conversion)?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let document = parse_bytes(data).map_err(Error::into_conversion)?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UndocxResult {
    /// Render with the builder's options.
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        render::convert(&self.document, &self.render_options)
    }

    /// Structural summary of the document.
    pub fn summary(&self) -> StructureSummary {
        render::analyze_structure(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
