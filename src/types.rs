//! Core value types shared across the pipeline.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Header-matching strategy. Selected once at configuration time; adding a
/// new export format means adding a variant here and teaching
/// [`HeaderMatcher`](crate::header::HeaderMatcher) about it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub enum ParseMode {
    /// Group exports: the identifier is the last `(...)` or `<...>` chunk of
    /// the header line, the rest of the line is the display name.
    Group,
    /// Friend exports: the whole header line minus the datetime prefix is
    /// both identifier and display name.
    Friend,
}

/// Mapping from speaker identifier to that speaker's raw message lines, in
/// order of appearance. Append-only while a scan runs, read-only afterwards.
///
/// Insertion order of identifiers is preserved: downstream ranking breaks
/// count ties by first appearance, so iteration order has to be stable.
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    order: Vec<String>,
    messages: HashMap<String, Vec<String>>,
}

impl MessageLog {
    /// Make sure `id` has a (possibly empty) message list. A header followed
    /// immediately by another header still registers its speaker.
    pub fn ensure(&mut self, id: &str) {
        if !self.messages.contains_key(id) {
            self.order.push(id.to_string());
            self.messages.insert(id.to_string(), Vec::new());
        }
    }

    /// Append a raw message line to `id`. Registers the identifier if it has
    /// not been seen before.
    pub fn push(&mut self, id: &str, line: String) {
        self.ensure(id);
        if let Some(list) = self.messages.get_mut(id) {
            list.push(line);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.messages.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&[String]> {
        self.messages.get(id).map(Vec::as_slice)
    }

    /// Identifiers in order of first appearance.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// (identifier, messages) pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order.iter().map(|id| {
            (
                id.as_str(),
                self.messages.get(id).map(Vec::as_slice).unwrap_or(&[]),
            )
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total number of message lines across all identifiers.
    pub fn message_count(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }
}

// Serialized as a JSON object in first-appearance order, matching the
// intermediate dump format (`--dump-json`).
impl Serialize for MessageLog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (id, messages) in self.iter() {
            map.serialize_entry(id, messages)?;
        }
        map.end()
    }
}

/// Label → count mapping with first-insertion iteration order.
///
/// Keys are tokens when counting one speaker's words, or identifiers when
/// counting a fixed word set across speakers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    order: Vec<String>,
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn add(&mut self, label: &str, n: u64) {
        match self.counts.get_mut(label) {
            Some(count) => *count += n,
            None => {
                self.order.push(label.to_string());
                self.counts.insert(label.to_string(), n);
            }
        }
    }

    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// (label, count) pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|label| (label.as_str(), self.counts.get(label).copied().unwrap_or(0)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// One row of the terminal artifact: a label with its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub label: String,
    pub count: u64,
}
