//! Message-line cleanup before tokenization.
//!
//! Chat exports are full of non-text noise: emoji and other pictographs,
//! `[sticker]`/`[image]` style placeholders, and `@name` mention prefixes.
//! None of these should reach the segmenter.

use once_cell::sync::Lazy;
use regex::Regex;

// Supplementary-plane pictographs, [xxx] placeholders, @mentions.
static NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\u{10000}-\u{10FFFF}]|\[.*?\]|@\S+\s").expect("valid regex"));

/// Strip noise from a raw message line. Whitespace is trimmed at the edges
/// but kept between words: the segmenter owns token boundaries, and a
/// whitespace-splitting segmenter needs the interior spaces intact.
///
/// Returns an empty string for lines that are pure noise; callers drop
/// those before tokenization.
pub fn clean(raw: &str) -> String {
    NOISE.replace_all(raw, "").trim().to_string()
}
