//! Heading inference from presentational cues.
//!
//! DOCX bodies rarely mark headings explicitly, so a paragraph is scored on
//! boldness, font size relative to the document baseline, centering and
//! brevity, and the score is run through an ordered decision ladder.

use crate::model::{Alignment, Document, Paragraph};
use serde::{Deserialize, Serialize};

use super::sanitize::sanitizer;

/// Paragraphs longer than this (in characters) are never headings.
pub const MAX_HEADING_CHARS: usize = 200;

/// Paragraphs with more words than this are never headings.
pub const MAX_HEADING_WORDS: usize = 25;

/// Paragraphs with at most this many words score as short.
pub const SHORT_TEXT_WORDS: usize = 10;

/// A run is large when its size exceeds the baseline by more than this.
pub const LARGE_FONT_EXCESS: f32 = 1.0;

/// Score weight of a bold run.
pub const BOLD_WEIGHT: u32 = 3;

/// Score weight of a large run.
pub const LARGE_FONT_WEIGHT: u32 = 2;

/// Score weight of centered alignment.
pub const CENTERED_WEIGHT: u32 = 5;

/// Score weight of short text.
pub const SHORT_TEXT_WEIGHT: u32 = 1;

/// Inferred structural level of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    /// Not a heading
    Body,
    /// Top-level heading
    H1,
    /// Second-level heading
    H2,
    /// Third-level heading
    H3,
}

impl HeadingLevel {
    /// Check if this level is a heading.
    pub fn is_heading(self) -> bool {
        self != HeadingLevel::Body
    }
}

/// Formatting signals extracted from one paragraph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingSignals {
    /// Any run is bold
    pub bold: bool,
    /// Any run exceeds the baseline by more than [`LARGE_FONT_EXCESS`]
    pub large_font: bool,
    /// The paragraph is centered
    pub centered: bool,
    /// Largest of the baseline and every declared run size
    pub max_font_size: f32,
    /// Whitespace-separated word count
    pub word_count: usize,
}

impl HeadingSignals {
    /// Collect the signals of a paragraph.
    pub fn collect(paragraph: &Paragraph, word_count: usize, baseline: f32) -> Self {
        let large_font = paragraph
            .runs
            .iter()
            .filter_map(|r| r.font_size)
            .any(|size| size > baseline + LARGE_FONT_EXCESS);

        Self {
            bold: paragraph.has_bold(),
            large_font,
            centered: paragraph.alignment == Alignment::Center,
            max_font_size: paragraph
                .max_font_size()
                .map_or(baseline, |size| size.max(baseline)),
            word_count,
        }
    }

    /// Weighted heading score.
    pub fn score(&self) -> u32 {
        let mut score = 0;
        if self.bold {
            score += BOLD_WEIGHT;
        }
        if self.large_font {
            score += LARGE_FONT_WEIGHT;
        }
        if self.centered {
            score += CENTERED_WEIGHT;
        }
        if self.word_count <= SHORT_TEXT_WORDS {
            score += SHORT_TEXT_WEIGHT;
        }
        score
    }
}

/// One rung of the decision ladder.
#[derive(Debug, Clone, Copy)]
struct Rung {
    /// The rung applies when the largest size exceeds the baseline by more
    /// than this; `None` always applies.
    min_font_excess: Option<f32>,
    /// Score needed for `level`; below it the paragraph is body text.
    min_score: u32,
    level: HeadingLevel,
}

impl Rung {
    fn applies(&self, max_font_size: f32, baseline: f32) -> bool {
        self.min_font_excess
            .map_or(true, |excess| max_font_size > baseline + excess)
    }
}

/// First applicable rung decides; a failed score never falls through.
const LADDER: [Rung; 3] = [
    Rung {
        min_font_excess: Some(4.0),
        min_score: 2,
        level: HeadingLevel::H1,
    },
    Rung {
        min_font_excess: Some(2.0),
        min_score: 2,
        level: HeadingLevel::H2,
    },
    Rung {
        min_font_excess: None,
        min_score: 3,
        level: HeadingLevel::H3,
    },
];

/// Map a paragraph's largest font size and score to a level.
pub fn decide(max_font_size: f32, score: u32, baseline: f32) -> HeadingLevel {
    LADDER
        .iter()
        .find(|rung| rung.applies(max_font_size, baseline))
        .filter(|rung| score >= rung.min_score)
        .map_or(HeadingLevel::Body, |rung| rung.level)
}

/// Classify a paragraph given its sanitized (unescaped) text.
pub fn classify(paragraph: &Paragraph, sanitized_text: &str, baseline: f32) -> HeadingLevel {
    if sanitized_text.chars().count() > MAX_HEADING_CHARS {
        return HeadingLevel::Body;
    }

    let word_count = sanitized_text.split_whitespace().count();
    if word_count > MAX_HEADING_WORDS {
        return HeadingLevel::Body;
    }

    let signals = HeadingSignals::collect(paragraph, word_count, baseline);
    decide(signals.max_font_size, signals.score(), baseline)
}

/// A non-empty paragraph with its sanitized text and level.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedParagraph {
    /// Sanitized, unescaped text
    pub text: String,
    /// Inferred level
    pub level: HeadingLevel,
}

/// Classify every paragraph of a document in order.
///
/// Paragraphs whose sanitized text is empty are dropped.
pub fn classify_document(doc: &Document, baseline: f32) -> Vec<ClassifiedParagraph> {
    let sanitizer = sanitizer();
    doc.paragraphs
        .iter()
        .filter_map(|paragraph| {
            let text = sanitizer.sanitize(&paragraph.text, false);
            if text.is_empty() {
                return None;
            }
            let level = classify(paragraph, &text, baseline);
            Some(ClassifiedParagraph { text, level })
        })
        .collect()
}
