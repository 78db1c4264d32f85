//! DOCX parsing module.
//!
//! This module reads the WordprocessingML body of a DOCX container and
//! builds the [`Document`](crate::model::Document) model consumed by the
//! renderers.

mod docx_parser;

pub use docx_parser::DocxParser;
