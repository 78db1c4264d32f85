//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A parsed DOCX document.
///
/// Paragraphs and tables are kept as two independent sequences, each in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,

    /// Body tables in document order
    pub tables: Vec<Table>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of paragraphs, empty ones included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Check if the document has neither paragraphs nor tables.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Iterate over every run's font size in document order.
    ///
    /// Paragraphs are visited first to last, and runs within a paragraph
    /// first to last. Runs without a size are skipped.
    pub fn font_sizes(&self) -> impl Iterator<Item = f32> + '_ {
        self.paragraphs
            .iter()
            .flat_map(|p| p.runs.iter())
            .filter_map(|run| run.font_size)
    }
}
