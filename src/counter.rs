//! Word counting over a completed message log.
//!
//! Two queries, both deterministic and idempotent over the same log:
//!
//! - [`WordCounter::count_for_identity`]: token frequencies for one
//!   speaker's messages;
//! - [`WordCounter::count_for_words`]: per-speaker occurrence totals for a
//!   fixed word set ("who said these the most").

use std::collections::HashSet;

use crate::error::{ChatError, Result};
use crate::preprocess;
use crate::segment::Segmenter;
use crate::types::{FrequencyTable, MessageLog};

pub struct WordCounter<'a> {
    log: &'a MessageLog,
    segmenter: &'a dyn Segmenter,
    stopwords: HashSet<String>,
}

impl<'a> WordCounter<'a> {
    pub fn new(
        log: &'a MessageLog,
        segmenter: &'a dyn Segmenter,
        stopwords: HashSet<String>,
    ) -> Self {
        Self {
            log,
            segmenter,
            stopwords,
        }
    }

    /// Clean, segment, and stopword-filter one speaker's messages into a
    /// flat token stream. Lines that clean down to nothing contribute no
    /// tokens.
    fn tokens_for(&self, messages: &[String]) -> Vec<String> {
        let mut tokens = Vec::new();
        for message in messages {
            let cleaned = preprocess::clean(message);
            if cleaned.is_empty() {
                continue;
            }
            tokens.extend(
                self.segmenter
                    .segment(&cleaned)
                    .into_iter()
                    .filter(|token| !self.stopwords.contains(token)),
            );
        }
        tokens
    }

    /// Token frequencies for `id`'s messages. A speaker with zero messages
    /// yields an empty table; an unknown speaker is an error.
    pub fn count_for_identity(&self, id: &str) -> Result<FrequencyTable> {
        let Some(messages) = self.log.get(id) else {
            return Err(ChatError::NotFound { id: id.to_string() });
        };

        let mut table = FrequencyTable::default();
        for token in self.tokens_for(messages) {
            table.increment(&token);
        }
        Ok(table)
    }

    /// For every speaker, the total occurrence count of `words` in their
    /// filtered token stream. Speakers with a zero total are omitted.
    /// Display-name collisions are a presentation concern; the result is
    /// keyed by identifier and never merges two speakers.
    pub fn count_for_words(&self, words: &[String]) -> FrequencyTable {
        let mut table = FrequencyTable::default();
        for (id, messages) in self.log.iter() {
            let tokens = self.tokens_for(messages);
            let total = words
                .iter()
                .map(|word| tokens.iter().filter(|token| *token == word).count() as u64)
                .sum::<u64>();
            if total > 0 {
                table.add(id, total);
            }
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner;
    use crate::segment::UnicodeSegmenter;
    use crate::types::ParseMode;

    fn scan(raw: &[&str]) -> MessageLog {
        let lines: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        scanner::scan(ParseMode::Group, &lines).unwrap().log
    }

    fn stopwords(words: &[&str]) -> HashSet<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_tokens_for_one_identity() {
        let log = scan(&["2024-01-01 10:00:00 Alice(1001)", "hello hello world"]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table = counter.count_for_identity("1001").unwrap();
        assert_eq!(table.get("hello"), 2);
        assert_eq!(table.get("world"), 1);
    }

    #[test]
    fn stopwords_are_filtered() {
        let log = scan(&["2024-01-01 10:00:00 Alice(1001)", "the quick the fox"]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, stopwords(&["the"]));
        let table = counter.count_for_identity("1001").unwrap();
        assert_eq!(table.get("the"), 0);
        assert_eq!(table.get("quick"), 1);
    }

    #[test]
    fn unknown_identity_is_not_found() {
        let log = scan(&["2024-01-01 10:00:00 Alice(1001)", "hi"]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let err = counter.count_for_identity("9999").unwrap_err();
        assert!(matches!(err, ChatError::NotFound { ref id } if id == "9999"));
    }

    #[test]
    fn identity_with_zero_messages_yields_empty_table() {
        let log = scan(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "2024-01-01 10:00:05 Bob(1002)",
            "bob talks",
        ]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table = counter.count_for_identity("1001").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn noise_only_messages_contribute_no_tokens() {
        let log = scan(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "[sticker]",
            "😀😀",
            "real words",
        ]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table = counter.count_for_identity("1001").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("real"), 1);
    }

    #[test]
    fn counts_requested_words_per_speaker() {
        let log = scan(&["2024-01-01 10:00:00 Alice(1001)", "hello hello world"]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table = counter.count_for_words(&["world".to_string()]);
        assert_eq!(table.get("1001"), 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn zero_total_speakers_are_omitted() {
        let log = scan(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "tea please",
            "2024-01-01 10:00:05 Bob(1002)",
            "coffee please",
        ]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table = counter.count_for_words(&["tea".to_string()]);
        assert_eq!(table.get("1001"), 1);
        assert!(!table.iter().any(|(label, _)| label == "1002"));
    }

    #[test]
    fn word_set_totals_are_summed() {
        let log = scan(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "tea and coffee and tea",
        ]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let table =
            counter.count_for_words(&["tea".to_string(), "coffee".to_string()]);
        assert_eq!(table.get("1001"), 3);
    }

    #[test]
    fn counting_is_idempotent() {
        let log = scan(&["2024-01-01 10:00:00 Alice(1001)", "hello hello world"]);
        let counter = WordCounter::new(&log, &UnicodeSegmenter, HashSet::new());
        let first = counter.count_for_identity("1001").unwrap();
        let second = counter.count_for_identity("1001").unwrap();
        assert_eq!(first, second);
    }
}
