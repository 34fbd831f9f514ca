//! The log-scanning state machine.
//!
//! Turns the normalized line sequence into a [`MessageLog`]: a mapping from
//! speaker identifier to that speaker's message lines. Three states:
//!
//! - `Empty` classifies the current line without consuming it;
//! - `Id` consumes a header line and switches the current speaker;
//! - `Message` consumes a body line and appends it to the current speaker.
//!
//! The classify/consume split matters: whether a non-header line is garbage
//! (before the first header) or a message (after it) depends on scanner
//! state, not on the line itself, and a header ending one speaker's turn
//! must still be available to start the next one.

use tracing::debug;

use crate::error::Result;
use crate::header::{DisplayNames, HeaderMatcher};
use crate::types::{MessageLog, ParseMode};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum State {
    Empty,
    Id,
    Message,
}

/// Result of one scan: the message log plus the display names collected from
/// the headers along the way.
#[derive(Debug)]
pub struct ScanOutcome {
    pub log: MessageLog,
    pub names: DisplayNames,
}

/// Scan `lines` in `mode`. Consumes every line exactly once; aborts on the
/// first header that matches the datetime stamp but yields no identifier.
pub fn scan(mode: ParseMode, lines: &[String]) -> Result<ScanOutcome> {
    let mut matcher = HeaderMatcher::new(mode);
    let mut log = MessageLog::default();
    let mut state = State::Empty;
    let mut current: Option<String> = None;
    let mut pos = 0usize;
    let mut skipped = 0usize;

    while pos < lines.len() {
        let line = &lines[pos];
        match state {
            State::Empty => {
                if matcher.is_header(line) {
                    state = State::Id;
                } else if current.is_none() {
                    // Preamble before the first header (export banners,
                    // BOM remnants). Discard.
                    pos += 1;
                    skipped += 1;
                } else {
                    state = State::Message;
                }
            }
            State::Id => {
                let id = matcher.extract(line, pos)?;
                log.ensure(&id);
                current = Some(id);
                pos += 1;
                state = State::Empty;
            }
            State::Message => {
                // `current` is always set here: Empty only routes to Message
                // once an identifier has been established.
                if let Some(id) = &current {
                    log.push(id, line.clone());
                }
                pos += 1;
                state = State::Empty;
            }
        }
    }

    debug!(
        speakers = log.len(),
        messages = log.message_count(),
        skipped,
        "scan complete"
    );
    Ok(ScanOutcome {
        log,
        names: matcher.into_names(),
    })
}
