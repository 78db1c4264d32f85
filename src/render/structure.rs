//! Read-only structural summary of a document.

use crate::model::Document;
use serde::{Deserialize, Serialize};

use super::fonts::{analyze, FontStats};
use super::heading::classify_document;

/// Structural summary of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureSummary {
    /// Non-empty paragraphs classified as body text
    pub paragraph_count: usize,

    /// Non-empty paragraphs classified as headings
    pub heading_count: usize,

    /// Number of tables
    pub table_count: usize,

    /// Font size statistics
    pub font_stats: FontStats,
}

impl StructureSummary {
    /// Total number of non-empty paragraphs.
    pub fn total_paragraphs(&self) -> usize {
        self.paragraph_count + self.heading_count
    }
}

/// Summarize the structure of a document.
///
/// Paragraphs that are empty after sanitizing are counted in neither
/// `paragraph_count` nor `heading_count`.
pub fn analyze_structure(doc: &Document) -> StructureSummary {
    let font_stats = analyze(doc);
    let classified = classify_document(doc, font_stats.baseline);
    let heading_count = classified.iter().filter(|p| p.level.is_heading()).count();

    StructureSummary {
        paragraph_count: classified.len() - heading_count,
        heading_count,
        table_count: doc.table_count(),
        font_stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, Paragraph, Table, TextRun};

    #[test]
    fn test_analyze_structure() {
        let mut doc = Document::new();
        doc.add_paragraph(
            Paragraph::from_runs(vec![TextRun::bold("Title").with_size(20.0)])
                .align(Alignment::Center),
        );
        doc.add_paragraph(Paragraph::from_runs(vec![TextRun::sized("one", 11.0)]));
        doc.add_paragraph(Paragraph::with_text("   "));
        doc.add_paragraph(Paragraph::from_runs(vec![TextRun::sized("two", 11.0)]));
        doc.add_table(Table::from_rows([["A"]]));
        doc.add_table(Table::new());

        let summary = analyze_structure(&doc);
        assert_eq!(summary.heading_count, 1);
        assert_eq!(summary.paragraph_count, 2);
        assert_eq!(summary.total_paragraphs(), 3);
        assert_eq!(summary.table_count, 2);
        assert_eq!(summary.font_stats.baseline, 11.0);
        assert_eq!(summary.font_stats.max, 20.0);
    }

    #[test]
    fn test_empty_document_summary() {
        let summary = analyze_structure(&Document::new());
        assert_eq!(summary.paragraph_count, 0);
        assert_eq!(summary.heading_count, 0);
        assert_eq!(summary.table_count, 0);
        assert_eq!(summary.font_stats, FontStats::default());
    }

    #[test]
    fn test_summary_serializes() {
        let json = serde_json::to_string(&analyze_structure(&Document::new())).unwrap();
        assert!(json.contains("\"paragraph_count\":0"));
        assert!(json.contains("\"baseline\":12.0"));
    }
}
