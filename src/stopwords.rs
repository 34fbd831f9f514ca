//! Stopword set loading.
//!
//! The counter takes the set as an explicit constructor argument; nothing
//! here is process-wide. A default list ships embedded in the binary, an
//! alternative file can be supplied per run.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

const DEFAULT_LIST: &str = include_str!("stopwords.txt");

fn parse_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// The embedded default stopword list.
pub fn default_set() -> HashSet<String> {
    parse_list(DEFAULT_LIST)
}

/// Load a newline-separated stopword file.
pub fn load_file(path: &Path) -> io::Result<HashSet<String>> {
    Ok(parse_list(&fs::read_to_string(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_non_empty_and_trimmed() {
        let set = default_set();
        assert!(set.contains("的"));
        assert!(set.contains("the"));
        assert!(!set.contains(""));
    }

    #[test]
    fn parse_list_skips_blank_lines() {
        let set = parse_list("foo\n\n  bar  \n");
        assert_eq!(set.len(), 2);
        assert!(set.contains("bar"));
    }
}
