//! Top-N ranking of a frequency table.

use crate::error::{ChatError, Result};
use crate::types::{FrequencyTable, RankedEntry};

/// Sort by count descending and keep at most `limit` entries. Ties keep the
/// table's first-insertion order (stable sort), so repeated runs over the
/// same input produce identical output. An empty table is a reportable
/// condition, not a silent empty chart.
pub fn top_n(table: &FrequencyTable, limit: usize) -> Result<Vec<RankedEntry>> {
    if table.is_empty() {
        return Err(ChatError::EmptyResult);
    }

    let mut entries: Vec<RankedEntry> = table
        .iter()
        .map(|(label, count)| RankedEntry {
            label: label.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    Ok(entries)
}
