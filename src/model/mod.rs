//! Document model types for DOCX content representation.
//!
//! This module defines the intermediate representation that bridges
//! DOCX parsing and content rendering. The model only carries what the
//! renderers consume: paragraph text, run-level bold and size, paragraph
//! alignment, and table cell text.

mod document;
mod paragraph;
mod table;

pub use document::Document;
pub use paragraph::{Alignment, Paragraph, TextRun};
pub use table::{Table, TableCell, TableRow};
