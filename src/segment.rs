//! Word segmentation seam.
//!
//! Segmentation is language-specific and pluggable: the counter only needs
//! `segment(text) → tokens`. The default implementation rides on UAX#29
//! word boundaries, which splits space-separated scripts on whitespace and
//! CJK runs per ideograph. A dictionary-based segmenter can be swapped in
//! behind the same trait without touching the counting code.

use unicode_segmentation::UnicodeSegmentation;

/// A pure text → tokens function. Implementations are expected to normalize
/// case/script as appropriate; the counter compares tokens by exact string
/// equality.
pub trait Segmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Default segmenter: UAX#29 word boundaries, lowercased.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|word| word.to_lowercase())
            .collect()
    }
}
