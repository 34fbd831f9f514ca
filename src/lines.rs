//! Line normalization for raw chat-log text.
//!
//! The scanner works over an ordered sequence of non-blank lines. This
//! module produces that sequence: trailing whitespace stripped, fully blank
//! lines dropped, and a UTF-8 BOM on the first line removed (several chat
//! exporters prepend one).

use std::fs;
use std::io;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Split already-decoded text into the normalized line sequence.
pub fn split_lines(text: &str) -> Vec<String> {
    text.trim_start_matches(BOM)
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Read a log file and normalize it in one step.
pub fn read_log(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(split_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_lines_and_trailing_whitespace() {
        let lines = split_lines("first  \n\n   \nsecond\r\n");
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn strips_leading_bom() {
        let lines = split_lines("\u{feff}2024-01-01 10:00:00 Alice(1001)\nhi");
        assert_eq!(lines[0], "2024-01-01 10:00:00 Alice(1001)");
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(split_lines("").is_empty());
        assert!(split_lines("\n\n").is_empty());
    }
}
