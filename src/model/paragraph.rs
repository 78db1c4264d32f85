//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Full paragraph text
    pub text: String,

    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph alignment
    pub alignment: Alignment,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unformatted run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::from_runs(vec![TextRun::new(text)])
    }

    /// Create a paragraph from runs; the text is their concatenation.
    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        let text = runs.iter().map(|r| r.text.as_str()).collect();
        Self {
            text,
            runs,
            alignment: Alignment::default(),
        }
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Add a run, extending the paragraph text.
    pub fn add_run(&mut self, run: TextRun) {
        self.text.push_str(&run.text);
        self.runs.push(run);
    }

    /// Check if any run is bold.
    pub fn has_bold(&self) -> bool {
        self.runs.iter().any(|r| r.bold)
    }

    /// Largest declared run font size, if any run declares one.
    pub fn max_font_size(&self) -> Option<f32> {
        self.runs
            .iter()
            .filter_map(|r| r.font_size)
            .fold(None, |acc, size| match acc {
                Some(max) if max >= size => Some(max),
                _ => Some(size),
            })
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A run of text sharing one set of formatting attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Font size in points
    pub font_size: Option<f32>,
}

impl TextRun {
    /// Create a new text run with no formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            font_size: None,
        }
    }

    /// Create a text run with an explicit font size.
    pub fn sized(text: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            bold: false,
            font_size: Some(font_size),
        }
    }

    /// Set the font size and return self.
    pub fn with_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
    /// No alignment declared on the paragraph
    #[default]
    Unspecified,
}
