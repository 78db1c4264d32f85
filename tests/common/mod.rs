//! Helpers building DOCX archives in memory.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Build a DOCX archive whose body holds the given WordprocessingML.
pub fn docx_bytes(body: &str) -> Vec<u8> {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        WML_NS, body
    );
    archive(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("word/document.xml", xml.as_str()),
    ])
}

/// Build a ZIP archive from (name, content) entries.
pub fn archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
    for (name, content) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

/// Unformatted paragraph.
pub fn p(text: &str) -> String {
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
}

/// Paragraph with one run carrying the given formatting.
pub fn styled(text: &str, bold: bool, size_pt: Option<u32>, centered: bool) -> String {
    let mut rpr = String::new();
    if bold {
        rpr.push_str("<w:b/>");
    }
    if let Some(size) = size_pt {
        rpr.push_str(&format!(r#"<w:sz w:val="{}"/>"#, size * 2));
    }
    let ppr = if centered {
        r#"<w:pPr><w:jc w:val="center"/></w:pPr>"#
    } else {
        ""
    };
    format!(
        r#"<w:p>{}<w:r><w:rPr>{}</w:rPr><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
        ppr, rpr, text
    )
}

/// Body paragraph at an explicit size.
pub fn sized(text: &str, size_pt: u32) -> String {
    styled(text, false, Some(size_pt), false)
}

/// Table from rows of cell texts.
pub fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl>");
    for row in rows {
        xml.push_str("<w:tr>");
        for cell in *row {
            xml.push_str("<w:tc>");
            xml.push_str(&p(cell));
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;
