//! Command-line argument surface.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::types::ParseMode;

fn parse_limit(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("--limit must be a positive integer".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("invalid --limit value: {raw}")),
    }
}

#[derive(Parser, Debug)]
#[command(name = "chatfreq", version)]
#[command(about = "Word-frequency analyzer for exported chat logs")]
#[command(group(ArgGroup::new("query").args(["id", "words"])))]
pub struct Args {
    /// The chat-history export file.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Parser mode: group exports carry the account id in brackets, friend
    /// exports carry only the display name.
    #[arg(short, long, value_enum, default_value_t = ParseMode::Group)]
    pub mode: ParseMode,

    /// The speaker to analyze: account id in group mode, display name in
    /// friend mode.
    #[arg(short, long)]
    pub id: Option<String>,

    /// Count only these comma-separated words and rank speakers by who said
    /// them the most. Mutually exclusive with --id.
    #[arg(short, long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Maximum number of ranked entries to show.
    #[arg(short, long, default_value_t = 10, value_parser = parse_limit)]
    pub limit: usize,

    /// Newline-separated stopword file overriding the embedded default list.
    #[arg(long)]
    pub stopwords: Option<PathBuf>,

    /// Write the scanned identifier → messages map as JSON and keep going
    /// (or stop there when neither --id nor --words is given).
    #[arg(long, value_name = "PATH")]
    pub dump_json: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
