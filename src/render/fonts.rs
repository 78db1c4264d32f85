//! Font size statistics used as the reference for heading detection.

use crate::model::Document;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Baseline font size when a document declares no run sizes.
pub const DEFAULT_BASELINE: f32 = 12.0;

/// Font size statistics of a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontStats {
    /// Most frequent run font size (modal size)
    pub baseline: f32,

    /// Smallest observed size
    pub min: f32,

    /// Largest observed size
    pub max: f32,

    /// Every observed size, in document order
    pub sizes: Vec<f32>,
}

impl FontStats {
    /// Compute statistics from sizes given in document scan order.
    ///
    /// The baseline is the most frequent size; on a tie the size seen
    /// first wins. Non-finite and non-positive sizes are ignored.
    pub fn from_sizes(sizes: impl IntoIterator<Item = f32>) -> Self {
        let sizes: Vec<f32> = sizes
            .into_iter()
            .filter(|s| s.is_finite() && *s > 0.0)
            .collect();

        // Keyed by bit pattern; insertion order is first-seen order.
        let mut counts: IndexMap<u32, usize> = IndexMap::new();
        for size in &sizes {
            *counts.entry(size.to_bits()).or_insert(0) += 1;
        }

        let modal = counts
            .iter()
            .fold(None, |best: Option<(u32, usize)>, (&bits, &count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((bits, count)),
            });

        let Some((bits, _)) = modal else {
            return Self::default();
        };

        let min = sizes.iter().copied().fold(f32::INFINITY, f32::min);
        let max = sizes.iter().copied().fold(f32::NEG_INFINITY, f32::max);

        Self {
            baseline: f32::from_bits(bits),
            min,
            max,
            sizes,
        }
    }

    /// Check if no sizes were observed.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl Default for FontStats {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE,
            min: DEFAULT_BASELINE,
            max: DEFAULT_BASELINE,
            sizes: Vec::new(),
        }
    }
}

/// Analyze the run font sizes of a document.
pub fn analyze(doc: &Document) -> FontStats {
    let stats = FontStats::from_sizes(doc.font_sizes());
    log::debug!(
        "Font analysis: baseline {}pt over {} sized runs",
        stats.baseline,
        stats.sizes.len()
    );
    stats
}
