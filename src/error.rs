//! Error taxonomy for the scanning and counting pipeline.
//!
//! Everything the core can fail with is a [`ChatError`]; encoding and
//! file-open failures stay in the I/O layer and are wrapped at the
//! binary boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// The line sequence does not conform to the header/message grammar.
    /// Fatal for the current scan; carries the 1-based line number and the
    /// offending content for diagnosis.
    #[error(
        "cannot find an identifier in line {line}, but it starts with a regular datetime.\n\
         content: {content}\n\
         did you mean to run with --mode friend?"
    )]
    Scanning { line: usize, content: String },

    /// A requested identifier is absent from a completed message log.
    #[error(
        "{id} does not exist in the log. \
         check the identifier spelling and the parser mode (group vs friend)"
    )]
    NotFound { id: String },

    /// Ranking was requested on an empty frequency table.
    #[error("nothing to rank: the frequency table is empty")]
    EmptyResult,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatError>;
