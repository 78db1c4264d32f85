//! Rendering options and configuration.

/// Output flavor of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Sanitized plain text, paragraphs separated by a blank line
    #[default]
    PlainText,
    /// Structural HTML with inferred headings and numbered paragraphs
    Html,
}

/// Options for rendering document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Output flavor
    pub mode: OutputMode,

    /// Append rendered tables after the paragraph block
    pub include_tables: bool,
}

impl RenderOptions {
    /// Create new render options with defaults (plain text, no tables).
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text options.
    pub fn plain_text() -> Self {
        Self {
            mode: OutputMode::PlainText,
            include_tables: false,
        }
    }

    /// HTML options; tables are included.
    pub fn html() -> Self {
        Self {
            mode: OutputMode::Html,
            include_tables: true,
        }
    }

    /// Set the output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable table output.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::plain_text()
    }
}
