//! DOCX document converter implementation.

use crate::detect::validate_upload;
use crate::error::Result;
use crate::model::Document;
use crate::parser::DocxParser;
use crate::render::{
    analyze_structure, to_html, to_json, to_text, to_text_with_tables, JsonFormat,
};
use std::fs;
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter, OutputFormat};

/// DOCX document converter.
///
/// Converts DOCX documents to plain text, plain text with tables, HTML,
/// or JSON. Files are checked with [`validate_upload`] before parsing.
/// Any failure is reported as
/// [`Error::Conversion`](crate::Error::Conversion) and no
/// partial output is produced.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Render an already parsed document.
    pub fn convert_document(
        &self,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let format = options.output_format;
        let content = match format {
            OutputFormat::Text => to_text(doc),
            OutputFormat::TextWithTables => to_text_with_tables(doc),
            OutputFormat::Html => to_html(doc),
            OutputFormat::Json => to_json(doc, JsonFormat::Pretty)?,
        };

        Ok(ConvertResult::new(content, analyze_structure(doc))
            .with_mime_type(format.mime_type()))
    }
}

/// Read a file, validate it by name and content, then parse it.
fn load_validated(path: &Path) -> Result<Document> {
    let data = fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    validate_upload(&name, &data)?;
    DocxParser::from_bytes(&data)?.parse()
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        load_validated(path)
            .and_then(|doc| self.convert_document(&doc, options))
            .map_err(|e| {
                log::error!("Failed to convert {}: {}", path.display(), e);
                e.into_conversion()
            })
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        DocxParser::from_bytes(bytes)
            .and_then(|parser| parser.parse())
            .and_then(|doc| self.convert_document(&doc, options))
            .map_err(|e| {
                log::error!("Failed to convert {} bytes: {}", bytes.len(), e);
                e.into_conversion()
            })
    }
}
