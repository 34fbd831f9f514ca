//! Terminal bar chart for ranked frequency results.
//!
//! One row per ranked entry, bar length scaled to the highest count.
//! Labels are padded by display width so CJK names line up.

use console::{measure_text_width, style};

use crate::types::RankedEntry;

const MIN_BAR_AREA: usize = 10;

/// Render `entries` as an aligned horizontal bar chart fitting `width`
/// columns. Pure string building; the caller decides where it goes.
pub fn render(title: &str, entries: &[RankedEntry], width: usize) -> String {
    let label_width = entries
        .iter()
        .map(|entry| measure_text_width(&entry.label))
        .max()
        .unwrap_or(0);
    let count_width = entries
        .iter()
        .map(|entry| entry.count.to_string().len())
        .max()
        .unwrap_or(1);
    let max_count = entries.iter().map(|entry| entry.count).max().unwrap_or(1);

    // label + space + count + space + bar
    let bar_area = width
        .saturating_sub(label_width + count_width + 2)
        .max(MIN_BAR_AREA);

    let mut out = String::new();
    out.push_str(&format!("{}\n", style(title).bold()));
    for entry in entries {
        let pad = label_width - measure_text_width(&entry.label);
        let bar_len = ((entry.count as f64 / max_count as f64) * bar_area as f64).round() as usize;
        // Non-zero counts always get at least one cell.
        let bar = "█".repeat(bar_len.max(1));
        out.push_str(&format!(
            "{}{} {:>count_width$} {}\n",
            entry.label,
            " ".repeat(pad),
            entry.count,
            style(bar).cyan(),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, u64)]) -> Vec<RankedEntry> {
        pairs
            .iter()
            .map(|(label, count)| RankedEntry {
                label: label.to_string(),
                count: *count,
            })
            .collect()
    }

    #[test]
    fn contains_title_labels_and_counts() {
        let out = render("demo - Top2", &entries(&[("hello", 4), ("world", 2)]), 80);
        assert!(out.contains("demo - Top2"));
        assert!(out.contains("hello"));
        assert!(out.contains("4"));
        assert!(out.contains("█"));
    }

    #[test]
    fn higher_counts_get_longer_bars() {
        let out = render("t", &entries(&[("a", 10), ("b", 1)]), 60);
        let bars: Vec<usize> = out
            .lines()
            .skip(1)
            .map(|line| line.matches('█').count())
            .collect();
        assert!(bars[0] > bars[1]);
        assert!(bars[1] >= 1);
    }

    #[test]
    fn narrow_terminals_still_render() {
        let out = render("t", &entries(&[("a-long-label", 3)]), 10);
        assert!(out.contains("a-long-label"));
    }
}
