//! Text sanitization shared by every renderer.

use regex::Regex;
use std::sync::OnceLock;

/// Strips control characters, collapses whitespace and optionally escapes HTML.
pub struct TextSanitizer {
    control_chars: Regex,
    whitespace: Regex,
}

impl TextSanitizer {
    /// Create a new sanitizer.
    pub fn new() -> Self {
        Self {
            // Tab, LF and CR are left for the whitespace pass.
            control_chars: Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F-\x9F]").unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Sanitize raw document text.
    ///
    /// Removes C0/C1 control characters, collapses every whitespace run
    /// into a single space and trims both ends. With `escape`, the
    /// result is entity-escaped with [`escape_html`]. Text that is empty
    /// after trimming yields an empty string.
    pub fn sanitize(&self, raw: &str, escape: bool) -> String {
        let stripped = self.control_chars.replace_all(raw, "");
        let collapsed = self.whitespace.replace_all(&stripped, " ");
        let trimmed = collapsed.trim();

        if escape {
            escape_html(trimmed)
        } else {
            trimmed.to_string()
        }
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared sanitizer instance.
pub fn sanitizer() -> &'static TextSanitizer {
    static SANITIZER: OnceLock<TextSanitizer> = OnceLock::new();
    SANITIZER.get_or_init(TextSanitizer::new)
}

/// Sanitize text with the shared sanitizer.
pub fn sanitize(raw: &str, escape: bool) -> String {
    sanitizer().sanitize(raw, escape)
}

/// Escape `&`, `<`, `>`, `"` and `'` as HTML entities.
///
/// Single pass; the output equals replacing `&` first and then the other
/// four characters in order, so entities are never double-escaped.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
