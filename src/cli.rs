//! Pipeline dispatch shared by the binary: scan, count, rank, render.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail};
use console::Term;
use tracing::warn;

use crate::args::Args;
use crate::counter::WordCounter;
use crate::header::DisplayNames;
use crate::ranker;
use crate::segment::UnicodeSegmenter;
use crate::types::FrequencyTable;
use crate::{chart, lines, scanner, stopwords};

/// Run one full analysis pass for the parsed arguments.
pub fn run(args: &Args) -> Result<()> {
    let log_lines = lines::read_log(&args.file)
        .with_context(|| format!("cannot read {}", args.file.display()))?;
    let outcome = scanner::scan(args.mode, &log_lines)?;

    if let Some(path) = &args.dump_json {
        let json = serde_json::to_string_pretty(&outcome.log)?;
        fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    }

    let (label, table) = match (&args.id, &args.words) {
        (Some(id), None) => {
            let counter = make_counter(args, &outcome)?;
            let table = counter.count_for_identity(id)?;
            (outcome.names.resolve(id).to_string(), table)
        }
        (None, Some(words)) => {
            let counter = make_counter(args, &outcome)?;
            let table = counter.count_for_words(words);
            (words.join(","), relabel(table, &outcome.names))
        }
        (None, None) => {
            if args.dump_json.is_some() {
                return Ok(());
            }
            bail!("nothing to do: pass --id, --words, or --dump-json");
        }
        // clap's ArgGroup already rejects this combination
        (Some(_), Some(_)) => bail!("--id and --words are mutually exclusive"),
    };

    let ranked = ranker::top_n(&table, args.limit)?;
    let title = format!("{} word frequency - Top{}", label, ranked.len());
    let width = Term::stdout().size().1 as usize;
    print!("{}", chart::render(&title, &ranked, width));
    Ok(())
}

fn make_counter<'a>(
    args: &Args,
    outcome: &'a scanner::ScanOutcome,
) -> Result<WordCounter<'a>> {
    let stopwords = match &args.stopwords {
        Some(path) => stopwords::load_file(path)
            .with_context(|| format!("cannot read stopword file {}", path.display()))?,
        None => stopwords::default_set(),
    };
    Ok(WordCounter::new(&outcome.log, &UnicodeSegmenter, stopwords))
}

/// Swap identifier keys for display names in a per-speaker table. When two
/// identifiers share a display name, the first keeps the bare label and the
/// rest fall back to their identifier, with a warning naming both.
fn relabel(table: FrequencyTable, names: &DisplayNames) -> FrequencyTable {
    let mut relabeled = FrequencyTable::default();
    let mut taken: HashMap<String, String> = HashMap::new();
    for (id, count) in table.iter() {
        let name = names.resolve(id).to_string();
        match taken.get(&name) {
            Some(owner) if owner != id => {
                warn!(
                    display_name = %name,
                    shown = %owner,
                    conflicting = %id,
                    "two identifiers share a display name; the label shows the first, \
                     the other is listed under its identifier"
                );
                relabeled.add(id, count);
            }
            _ => {
                taken.insert(name.clone(), id.to_string());
                relabeled.add(&name, count);
            }
        }
    }
    relabeled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParseMode;

    fn outcome(raw: &[&str]) -> scanner::ScanOutcome {
        let lines: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        scanner::scan(ParseMode::Group, &lines).unwrap()
    }

    #[test]
    fn relabel_swaps_ids_for_display_names() {
        let outcome = outcome(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "tea",
            "2024-01-01 10:00:05 Bob(1002)",
            "tea tea",
        ]);
        let mut table = FrequencyTable::default();
        table.add("1001", 1);
        table.add("1002", 2);
        let relabeled = relabel(table, &outcome.names);
        assert_eq!(relabeled.get("Alice"), 1);
        assert_eq!(relabeled.get("Bob"), 2);
    }

    #[test]
    fn colliding_display_names_stay_separate() {
        let outcome = outcome(&[
            "2024-01-01 10:00:00 Alice(1001)",
            "tea",
            "2024-01-01 10:00:05 Alice(2002)",
            "tea tea",
        ]);
        let mut table = FrequencyTable::default();
        table.add("1001", 1);
        table.add("2002", 2);
        let relabeled = relabel(table, &outcome.names);
        assert_eq!(relabeled.get("Alice"), 1);
        // The second Alice keeps her identifier as the label; counts are
        // never merged.
        assert_eq!(relabeled.get("2002"), 2);
        assert_eq!(relabeled.len(), 2);
    }
}
