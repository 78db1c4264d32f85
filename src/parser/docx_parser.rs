//! DOCX document parser using zip and roxmltree.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use roxmltree::Node;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Alignment, Document, Paragraph, Table, TableCell, TableRow, TextRun};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Word tables hold at most 63 grid columns.
const MAX_GRID_SPAN: usize = 63;

/// Main document part inside the container.
const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX document parser.
///
/// Holds the main document part read from the container; [`parse`](Self::parse)
/// turns it into a [`Document`].
pub struct DocxParser {
    xml: String,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a ZIP container
        detect_format_from_path(path)?;

        let file = File::open(path)?;
        Self::from_archive(ZipArchive::new(BufReader::new(file))?)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Self::from_archive(ZipArchive::new(Cursor::new(data))?)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn from_archive<R: Read + Seek>(mut archive: ZipArchive<R>) -> Result<Self> {
        let mut part = archive
            .by_name(DOCUMENT_PART)
            .map_err(|_| Error::MalformedDocument(format!("missing {}", DOCUMENT_PART)))?;

        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        Ok(Self { xml })
    }

    /// Parse the document body into paragraphs and tables.
    pub fn parse(&self) -> Result<Document> {
        let xml = roxmltree::Document::parse(&self.xml)?;
        let body = wml(xml.root_element(), "body")
            .ok_or_else(|| Error::MalformedDocument("missing w:body".into()))?;

        let mut doc = Document::new();
        for child in body.children().filter(is_wml) {
            match child.tag_name().name() {
                "p" => doc.add_paragraph(parse_paragraph(child)),
                "tbl" => doc.add_table(parse_table(child)),
                _ => {}
            }
        }

        log::debug!(
            "Parsed DOCX body: {} paragraphs, {} tables",
            doc.paragraph_count(),
            doc.table_count()
        );
        Ok(doc)
    }
}

fn is_wml(node: &Node) -> bool {
    node.is_element() && node.tag_name().namespace() == Some(WML_NS)
}

fn wml<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| is_wml(n) && n.tag_name().name() == name)
}

fn wml_children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| is_wml(n) && n.tag_name().name() == name)
}

fn wml_val<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.attribute((WML_NS, "val"))
}

/// WML toggle property: present without a value, or with any value other
/// than "0", "false" or "off", means on.
fn wml_toggle(parent: Node, name: &str) -> bool {
    wml(parent, name)
        .map(|n| wml_val(n).map_or(true, |v| !matches!(v, "0" | "false" | "off")))
        .unwrap_or(false)
}

fn parse_alignment(ppr: Option<Node>) -> Alignment {
    let val = ppr.and_then(|ppr| wml(ppr, "jc")).and_then(wml_val);
    match val {
        Some("center") => Alignment::Center,
        Some("right") | Some("end") => Alignment::Right,
        Some("both") | Some("distribute") => Alignment::Justify,
        Some("left") | Some("start") => Alignment::Left,
        _ => Alignment::Unspecified,
    }
}

fn parse_paragraph(node: Node) -> Paragraph {
    let mut paragraph = Paragraph::new().align(parse_alignment(wml(node, "pPr")));

    for child in node.children().filter(is_wml) {
        match child.tag_name().name() {
            "r" => paragraph.add_run(parse_run(child)),
            "hyperlink" => {
                for run in wml_children(child, "r") {
                    paragraph.add_run(parse_run(run));
                }
            }
            _ => {}
        }
    }

    paragraph
}

fn parse_run(node: Node) -> TextRun {
    let rpr = wml(node, "rPr");

    let mut text = String::new();
    for child in node.children().filter(is_wml) {
        match child.tag_name().name() {
            "t" => text.push_str(child.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }

    TextRun {
        text,
        bold: rpr.is_some_and(|rpr| wml_toggle(rpr, "b")),
        font_size: rpr.and_then(parse_font_size),
    }
}

/// `w:sz` is expressed in half-points.
fn parse_font_size(rpr: Node) -> Option<f32> {
    let raw = wml(rpr, "sz").and_then(wml_val)?;
    match raw.trim().parse::<f32>() {
        Ok(half_points) if half_points.is_finite() && half_points > 0.0 => Some(half_points / 2.0),
        _ => {
            log::warn!("Ignoring invalid run font size: {:?}", raw);
            None
        }
    }
}

/// Cells are expanded to one entry per grid column: a `w:gridSpan` cell is
/// repeated across its span, and a `w:vMerge` continuation repeats the text
/// of the cell above it.
fn parse_table(node: Node) -> Table {
    let mut table = Table::new();
    let mut above: Vec<String> = Vec::new();

    for tr in wml_children(node, "tr") {
        let mut texts: Vec<String> = Vec::new();
        for tc in wml_children(tr, "tc") {
            let tcpr = wml(tc, "tcPr");
            let text = if is_merge_continuation(tcpr) {
                above.get(texts.len()).cloned().unwrap_or_default()
            } else {
                cell_text(tc)
            };
            texts.extend(std::iter::repeat(text).take(grid_span(tcpr)));
        }

        table.add_row(TableRow::new(
            texts.iter().cloned().map(TableCell::text).collect(),
        ));
        above = texts;
    }
    table
}

fn grid_span(tcpr: Option<Node>) -> usize {
    let Some(raw) = tcpr.and_then(|p| wml(p, "gridSpan")).and_then(wml_val) else {
        return 1;
    };
    match raw.trim().parse::<usize>() {
        Ok(span) if span > 0 => span.min(MAX_GRID_SPAN),
        _ => {
            log::warn!("Ignoring invalid cell grid span: {:?}", raw);
            1
        }
    }
}

/// `w:vMerge` without a value, or with "continue", continues the cell above.
fn is_merge_continuation(tcpr: Option<Node>) -> bool {
    tcpr.and_then(|p| wml(p, "vMerge"))
        .is_some_and(|n| wml_val(n).map_or(true, |v| v == "continue"))
}

fn cell_text(node: Node) -> String {
    wml_children(node, "p")
        .map(|p| parse_paragraph(p).text)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(inner: &str) -> DocxParser {
        DocxParser {
            xml: format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
                WML_NS, inner
            ),
        }
    }

    #[test]
    fn test_parse_runs_and_formatting() {
        let doc = body(
            r#"<w:p>
                 <w:pPr><w:jc w:val="center"/></w:pPr>
                 <w:r><w:rPr><w:b/><w:sz w:val="36"/></w:rPr><w:t>Title</w:t></w:r>
                 <w:r><w:rPr><w:b w:val="0"/></w:rPr><w:t xml:space="preserve"> text</w:t></w:r>
               </w:p>"#,
        )
        .parse()
        .unwrap();

        assert_eq!(doc.paragraph_count(), 1);
        let p = &doc.paragraphs[0];
        assert_eq!(p.text, "Title text");
        assert_eq!(p.alignment, Alignment::Center);
        assert!(p.runs[0].bold);
        assert_eq!(p.runs[0].font_size, Some(18.0));
        assert!(!p.runs[1].bold);
        assert_eq!(p.runs[1].font_size, None);
    }

    #[test]
    fn test_parse_bold_toggle_values() {
        let doc = body(
            r#"<w:p>
                 <w:r><w:rPr><w:b w:val="off"/></w:rPr><w:t>a</w:t></w:r>
                 <w:r><w:rPr><w:b w:val="false"/></w:rPr><w:t>b</w:t></w:r>
                 <w:r><w:rPr><w:b w:val="on"/></w:rPr><w:t>c</w:t></w:r>
                 <w:r><w:rPr><w:b w:val="true"/></w:rPr><w:t>d</w:t></w:r>
                 <w:r><w:rPr><w:b w:val="1"/></w:rPr><w:t>e</w:t></w:r>
                 <w:r><w:t>f</w:t></w:r>
               </w:p>"#,
        )
        .parse()
        .unwrap();

        let bold: Vec<bool> = doc.paragraphs[0].runs.iter().map(|r| r.bold).collect();
        assert_eq!(bold, vec![false, false, true, true, true, false]);
    }

    #[test]
    fn test_bold_off_paragraph_stays_body() {
        let doc = body(r#"<w:p><w:r><w:rPr><w:b w:val="off"/></w:rPr><w:t>Hello</w:t></w:r></w:p>"#)
            .parse()
            .unwrap();

        assert!(!doc.paragraphs[0].has_bold());
        assert_eq!(crate::render::to_html(&doc), "<p01>Hello</p01>");
    }

    #[test]
    fn test_parse_tabs_breaks_and_hyperlinks() {
        let doc = body(
            r#"<w:p>
                 <w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r>
                 <w:hyperlink><w:r><w:t>link</w:t></w:r></w:hyperlink>
               </w:p>"#,
        )
        .parse()
        .unwrap();

        assert_eq!(doc.paragraphs[0].text, "a\tb\nclink");
        assert_eq!(doc.paragraphs[0].runs.len(), 2);
    }

    #[test]
    fn test_parse_alignment_values() {
        let doc = body(
            r#"<w:p><w:pPr><w:jc w:val="both"/></w:pPr></w:p>
               <w:p><w:pPr><w:jc w:val="end"/></w:pPr></w:p>
               <w:p><w:pPr><w:jc w:val="left"/></w:pPr></w:p>
               <w:p/>"#,
        )
        .parse()
        .unwrap();

        let alignments: Vec<_> = doc.paragraphs.iter().map(|p| p.alignment).collect();
        assert_eq!(
            alignments,
            vec![
                Alignment::Justify,
                Alignment::Right,
                Alignment::Left,
                Alignment::Unspecified
            ]
        );
    }

    #[test]
    fn test_parse_invalid_font_size_is_ignored() {
        let doc = body(r#"<w:p><w:r><w:rPr><w:sz w:val="big"/></w:rPr><w:t>x</w:t></w:r></w:p>"#)
            .parse()
            .unwrap();
        assert_eq!(doc.paragraphs[0].runs[0].font_size, None);
    }

    #[test]
    fn test_parse_table() {
        let doc = body(
            r#"<w:p><w:r><w:t>before</w:t></w:r></w:p>
               <w:tbl>
                 <w:tr>
                   <w:tc><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc>
                   <w:tc><w:p><w:r><w:t>B1</w:t></w:r></w:p><w:p><w:r><w:t>B2</w:t></w:r></w:p></w:tc>
                 </w:tr>
                 <w:tr>
                   <w:tc><w:p/></w:tc>
                   <w:tc><w:p><w:r><w:t>2</w:t></w:r></w:p></w:tc>
                 </w:tr>
               </w:tbl>"#,
        )
        .parse()
        .unwrap();

        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.table_count(), 1);
        let table = &doc.tables[0];
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0].cells[1].text, "B1\nB2");
        assert!(table.rows[1].cells[0].is_empty());
    }

    #[test]
    fn test_parse_merged_cells() {
        let doc = body(
            r#"<w:tbl>
                 <w:tr>
                   <w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p><w:r><w:t>Wide</w:t></w:r></w:p></w:tc>
                   <w:tc><w:tcPr><w:vMerge w:val="restart"/></w:tcPr><w:p><w:r><w:t>Tall</w:t></w:r></w:p></w:tc>
                 </w:tr>
                 <w:tr>
                   <w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p></w:tc>
                   <w:tc><w:p><w:r><w:t>2</w:t></w:r></w:p></w:tc>
                   <w:tc><w:tcPr><w:vMerge/></w:tcPr><w:p/></w:tc>
                 </w:tr>
               </w:tbl>"#,
        )
        .parse()
        .unwrap();

        let table = &doc.tables[0];
        assert_eq!(table.column_count(), 3);
        assert_eq!(
            crate::render::table_to_text(table).unwrap(),
            "Wide | Wide | Tall\n1 | 2 | Tall"
        );
    }

    #[test]
    fn test_invalid_grid_span_counts_once() {
        let doc = body(
            r#"<w:tbl><w:tr>
                 <w:tc><w:tcPr><w:gridSpan w:val="wide"/></w:tcPr><w:p><w:r><w:t>x</w:t></w:r></w:p></w:tc>
               </w:tr></w:tbl>"#,
        )
        .parse()
        .unwrap();
        assert_eq!(doc.tables[0].rows[0].cells.len(), 1);
    }

    #[test]
    fn test_missing_body() {
        let parser = DocxParser {
            xml: format!(r#"<w:document xmlns:w="{}"/>"#, WML_NS),
        };
        assert!(matches!(parser.parse(), Err(Error::MalformedDocument(_))));
    }

    #[test]
    fn test_invalid_xml() {
        let parser = DocxParser {
            xml: "<w:document".to_string(),
        };
        assert!(matches!(parser.parse(), Err(Error::Xml(_))));
    }

    #[test]
    fn test_from_bytes_rejects_non_zip() {
        assert!(matches!(
            DocxParser::from_bytes(b"not a docx"),
            Err(Error::UnknownFormat)
        ));
    }
}
