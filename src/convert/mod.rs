//! Document conversion front door.
//!
//! Wraps parsing and rendering into a single fallible call per document,
//! and fans independent documents out across threads.
//!
//! # Example
//!
//! ```no_run
//! use undocx::convert::{ConvertOptions, DocumentConverter, DocxConverter, OutputFormat};
//! use std::path::Path;
//!
//! fn main() -> undocx::Result<()> {
//!     let converter = DocxConverter::new();
//!     let options = ConvertOptions::new().with_format(OutputFormat::Html);
//!     let result = converter.convert(Path::new("report.docx"), &options)?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod docx;

pub use docx::DocxConverter;

use crate::error::Result;
use crate::render::StructureSummary;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output format
    pub output_format: OutputFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text of the paragraphs
    #[default]
    Text,

    /// Plain text of the paragraphs followed by the tables
    TextWithTables,

    /// Structural HTML including tables
    Html,

    /// JSON dump of the parsed model
    Json,
}

impl OutputFormat {
    /// MIME type of the rendered output.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Text | OutputFormat::TextWithTables => "text/plain",
            OutputFormat::Html => "text/html",
            OutputFormat::Json => "application/json",
        }
    }

    /// Conventional file extension of the rendered output.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text | OutputFormat::TextWithTables => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// MIME type of the output
    pub mime_type: &'static str,

    /// Structural summary of the source document
    pub summary: StructureSummary,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String, summary: StructureSummary) -> Self {
        Self {
            content,
            mime_type: "text/plain",
            summary,
        }
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in characters.
    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Check if the conversion produced no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new document format.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Convert independent files in parallel.
///
/// Each file is converted on its own; one failure does not affect the
/// others. Results are returned in input order.
pub fn convert_many<P>(
    paths: &[P],
    options: &ConvertOptions,
) -> Vec<(PathBuf, Result<ConvertResult>)>
where
    P: AsRef<Path> + Sync,
{
    let converter = DocxConverter::new();
    paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            (path.to_path_buf(), converter.convert(path, options))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_options_builder() {
        let options = ConvertOptions::new().with_format(OutputFormat::Html);
        assert_eq!(options.output_format, OutputFormat::Html);
        assert_eq!(ConvertOptions::default().output_format, OutputFormat::Text);
    }

    #[test]
    fn test_output_format_mime_types() {
        assert_eq!(OutputFormat::Text.mime_type(), "text/plain");
        assert_eq!(OutputFormat::TextWithTables.mime_type(), "text/plain");
        assert_eq!(OutputFormat::Html.mime_type(), "text/html");
        assert_eq!(OutputFormat::Json.mime_type(), "application/json");
        assert_eq!(OutputFormat::Html.extension(), "html");
    }

    #[test]
    fn test_content_len_counts_characters() {
        let result = ConvertResult::new(
            "héllo".to_string(),
            crate::render::analyze_structure(&Default::default()),
        );
        assert_eq!(result.content_len(), 5);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_convert_many_reports_each_failure() {
        let paths = ["missing-a.docx", "missing-b.docx"];
        let results = convert_many(&paths[..], &ConvertOptions::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, PathBuf::from("missing-a.docx"));
        assert!(results.iter().all(|(_, r)| r.is_err()));
    }
}
