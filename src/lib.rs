//! # chatfreq
//!
//! Word-frequency analyzer for exported chat logs. Scan once, rank
//! everything.
//!
//! A chat export is a flat text file where each speaker turn starts with a
//! date-stamped header line and the message lines follow. chatfreq scans
//! that structure into a per-speaker message log, tokenizes the messages,
//! filters stopwords, and prints a ranked frequency bar chart — either the
//! top words of one speaker, or the top speakers for a fixed word set.
//!
//! ## Pipeline
//!
//! ```text
//! raw text → lines → scanner (header matcher) → MessageLog
//!          → preprocess + segment + stopword filter → FrequencyTable
//!          → top-N ranking → terminal chart
//! ```
//!
//! ## Library usage
//!
//! ```rust
//! use chatfreq::{counter::WordCounter, ranker, scanner, segment::UnicodeSegmenter};
//! use chatfreq::types::ParseMode;
//!
//! let lines = vec![
//!     "2024-01-01 10:00:00 Alice(1001)".to_string(),
//!     "hello hello world".to_string(),
//! ];
//! let outcome = scanner::scan(ParseMode::Group, &lines).unwrap();
//! let counter = WordCounter::new(&outcome.log, &UnicodeSegmenter, Default::default());
//! let table = counter.count_for_identity("1001").unwrap();
//! let ranked = ranker::top_n(&table, 10).unwrap();
//! assert_eq!(ranked[0].label, "hello");
//! ```

/// CLI argument surface (clap derive).
pub mod args;

/// Terminal bar chart rendering.
pub mod chart;

/// Pipeline dispatch shared by the binary.
pub mod cli;

/// Word counting over a completed message log.
pub mod counter;

/// Error taxonomy: scanning, lookup, and empty-result failures.
pub mod error;

/// Header-line matching and identifier extraction (group/friend modes).
pub mod header;

/// Raw text → normalized non-blank line sequence.
pub mod lines;

/// Message cleanup before tokenization.
pub mod preprocess;

/// Top-N ranking with stable tie order.
pub mod ranker;

/// The log-scanning state machine.
pub mod scanner;

/// Word segmentation seam and the default UAX#29 segmenter.
pub mod segment;

/// Stopword set loading.
pub mod stopwords;

/// Core value types: modes, message log, frequency table.
pub mod types;

pub use error::{ChatError, Result};
