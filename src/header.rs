//! Header-line matching and identifier extraction.
//!
//! A header line announces a new speaker turn. It always starts with a
//! `YYYY-MM-DD hh:mm:ss` stamp; what follows depends on the export format:
//!
//! - group exports carry the account identifier in the last `(...)` or
//!   `<...>` chunk, the rest of the line is the display name;
//! - friend exports carry only the display name, which doubles as the
//!   identifier.
//!
//! The two strategies are a fixed [`ParseMode`] enumeration rather than a
//! trait-object hierarchy; the matcher dispatches on the mode.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ChatError, Result};
use crate::types::ParseMode;

static DATE_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}\s+\d{1,2}:\d{2}:\d{2}\s*").expect("valid regex")
});
static PARENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));
static ANGLES: Lazy<Regex> = Lazy::new(|| Regex::new(r"<(.*?)>").expect("valid regex"));

/// Identifier → display name, first-seen value wins.
///
/// Friend mode never records anything here; [`DisplayNames::resolve`] falls
/// back to the identifier itself, which is exactly what friend mode wants.
#[derive(Debug, Default, Clone)]
pub struct DisplayNames {
    names: HashMap<String, String>,
}

impl DisplayNames {
    fn record_first(&mut self, id: &str, name: String) {
        self.names.entry(id.to_string()).or_insert(name);
    }

    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.names.get(id).map(String::as_str).unwrap_or(id)
    }
}

/// Classifies lines as headers and extracts identifiers from them.
///
/// Classification (`is_header`) is a pure peek; extraction (`extract`) is
/// only called once the scanner has committed to consuming the line.
#[derive(Debug)]
pub struct HeaderMatcher {
    mode: ParseMode,
    names: DisplayNames,
}

impl HeaderMatcher {
    pub fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            names: DisplayNames::default(),
        }
    }

    /// A line is a header candidate iff it starts with the datetime stamp.
    /// Lines without the stamp are never headers, in either mode.
    pub fn is_header(&self, line: &str) -> bool {
        DATE_HEAD.is_match(line)
    }

    /// Extract the identifier from a header line. `line_number` is 0-based;
    /// errors report it 1-based.
    pub fn extract(&mut self, line: &str, line_number: usize) -> Result<String> {
        match self.mode {
            ParseMode::Group => self.extract_group(line, line_number),
            ParseMode::Friend => Ok(DATE_HEAD.replace(line, "").into_owned()),
        }
    }

    fn extract_group(&mut self, line: &str, line_number: usize) -> Result<String> {
        // Last bracketed chunk wins: display names may themselves contain
        // brackets, the account id is appended at the end of the line.
        let found = PARENS
            .captures_iter(line)
            .last()
            .map(|caps| (caps[1].to_string(), '('))
            .or_else(|| {
                ANGLES
                    .captures_iter(line)
                    .last()
                    .map(|caps| (caps[1].to_string(), '<'))
            });

        let Some((id, bracket)) = found else {
            return Err(ChatError::Scanning {
                line: line_number + 1,
                content: line.to_string(),
            });
        };

        let wrapped = match bracket {
            '(' => format!("({id})"),
            _ => format!("<{id}>"),
        };
        // Literal substring strip: if the same bracketed text occurs twice in
        // the line this over-strips. Known and accepted.
        let name = DATE_HEAD
            .replace(line, "")
            .replace(&wrapped, "")
            .trim()
            .to_string();
        self.names.record_first(&id, name);
        Ok(id)
    }

    pub fn names(&self) -> &DisplayNames {
        &self.names
    }

    pub fn into_names(self) -> DisplayNames {
        self.names
    }
}
