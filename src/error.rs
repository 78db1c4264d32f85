//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content is not a ZIP container and cannot be a DOCX file.
    #[error("Unknown file format: not a valid DOCX")]
    UnknownFormat,

    /// The file name does not carry the `.docx` extension.
    #[error("Unsupported file extension: {0} (only .docx is accepted)")]
    UnsupportedExtension(String),

    /// The input is empty.
    #[error("Input is empty")]
    EmptyInput,

    /// The input exceeds the accepted size.
    #[error("Input is too large: {0} bytes (limit is {1} bytes)")]
    InputTooLarge(usize, usize),

    /// The container was read but does not hold a usable document.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Error reading the ZIP container.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Error parsing document XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Error during rendering (text, HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A whole-document conversion failed; wraps the originating error.
    #[error("Failed to process DOCX document: {0}")]
    Conversion(#[source] Box<Error>),
}

impl Error {
    /// Wrap this error as a conversion failure.
    ///
    /// Already-wrapped errors are returned unchanged.
    pub fn into_conversion(self) -> Self {
        match self {
            Error::Conversion(_) => self,
            other => Error::Conversion(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyInput;
        assert_eq!(err.to_string(), "Input is empty");

        let err = Error::InputTooLarge(100, 50);
        assert_eq!(
            err.to_string(),
            "Input is too large: 100 bytes (limit is 50 bytes)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_conversion_wraps_source() {
        let err = Error::MalformedDocument("missing w:body".into()).into_conversion();
        assert_eq!(
            err.to_string(),
            "Failed to process DOCX document: Malformed document: missing w:body"
        );
        assert!(err.source().is_some());

        // Wrapping twice does not nest.
        let again = err.into_conversion();
        assert!(matches!(again, Error::Conversion(inner) if !matches!(*inner, Error::Conversion(_))));
    }
}
