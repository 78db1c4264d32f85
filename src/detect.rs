//! DOCX format detection and input validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Accepted file extension, lowercase without the dot.
pub const DOCX_EXTENSION: &str = "docx";

/// Largest input accepted by [`validate_upload`] (50 MiB).
pub const MAX_INPUT_SIZE: usize = 50 * 1024 * 1024;

/// Check if bytes start like a DOCX (ZIP) container.
///
/// # Arguments
/// * `data` - Byte slice to check
///
/// # Returns
/// * `true` if the data starts with the ZIP magic bytes
/// * `false` otherwise
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Check if a file name ends with `.docx` (case-insensitive).
///
/// A bare `.docx` name is accepted.
pub fn has_docx_extension(name: &str) -> bool {
    name.to_lowercase()
        .strip_suffix(DOCX_EXTENSION)
        .is_some_and(|rest| rest.ends_with('.'))
}

/// Detect a DOCX container from a file path.
///
/// # Returns
/// * `Ok(())` if the file starts with the ZIP magic bytes
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// detect_format_from_path("report.docx").unwrap();
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 4];
    match file.read_exact(&mut header) {
        Ok(()) => detect_format_from_bytes(&header),
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Err(Error::UnknownFormat),
        Err(e) => Err(e.into()),
    }
}

/// Detect a DOCX container from bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if is_docx_bytes(data) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Validate an uploaded file before parsing.
///
/// Checks, in order: the name has the `.docx` extension, the content is
/// not empty, the content is at most [`MAX_INPUT_SIZE`] bytes, and the
/// content is a ZIP container.
pub fn validate_upload(name: &str, data: &[u8]) -> Result<()> {
    if !has_docx_extension(name) {
        return Err(Error::UnsupportedExtension(name.to_string()));
    }
    if data.is_empty() {
        return Err(Error::EmptyInput);
    }
    if data.len() > MAX_INPUT_SIZE {
        return Err(Error::InputTooLarge(data.len(), MAX_INPUT_SIZE));
    }
    detect_format_from_bytes(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(b"PK\x03\x04rest"));
        assert!(!is_docx_bytes(b"%PDF-1.7"));
        assert!(!is_docx_bytes(b"PK"));
        assert!(!is_docx_bytes(b""));
    }

    #[test]
    fn test_has_docx_extension() {
        assert!(has_docx_extension("report.docx"));
        assert!(has_docx_extension("REPORT.DOCX"));
        assert!(has_docx_extension("dir/a.b.Docx"));
        assert!(!has_docx_extension("report.doc"));
        assert!(has_docx_extension(".docx"));
        assert!(!has_docx_extension("docx"));
        assert!(!has_docx_extension("report.docx.zip"));
        assert!(!has_docx_extension(""));
    }

    #[test]
    fn test_validate_upload_order() {
        assert!(matches!(
            validate_upload("a.txt", b""),
            Err(Error::UnsupportedExtension(_))
        ));
        assert!(matches!(validate_upload("a.docx", b""), Err(Error::EmptyInput)));
        assert!(matches!(
            validate_upload("a.docx", b"<html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(validate_upload("a.docx", b"PK\x03\x04....").is_ok());
    }

    #[test]
    fn test_validate_upload_too_large() {
        let mut data = vec![0u8; MAX_INPUT_SIZE + 1];
        data[..4].copy_from_slice(ZIP_MAGIC);
        assert!(matches!(
            validate_upload("big.docx", &data),
            Err(Error::InputTooLarge(n, MAX_INPUT_SIZE)) if n == MAX_INPUT_SIZE + 1
        ));
    }
}
