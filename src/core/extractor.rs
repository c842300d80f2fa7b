use crate::types::{column, Entry, SheetRow};
use tracing::warn;

/// Turn data rows (header already removed) into entries.
///
/// Rows without a key or without content are skipped with a warning.
/// Output keeps input order.
pub fn extract_entries(rows: &[SheetRow]) -> Vec<Entry> {
    rows.iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let entry = entry_from_row(row);
            if entry.is_none() {
                // +1 for the header row, +1 for 1-based sheet numbering
                warn!(row = idx + 2, cells = ?row, "Incomplete row skipped");
            }
            entry
        })
        .collect()
}

/// Build an entry from one row, or `None` if a required cell is empty
fn entry_from_row(row: &[String]) -> Option<Entry> {
    let key = cell(row, column::KEY)?;
    let content = cell(row, column::CONTENT)?;

    Some(Entry {
        key: key.to_string(),
        content: content.to_string(),
        remark: cell(row, column::REMARK).map(str::to_string),
        last_update_date: cell(row, column::LAST_UPDATE_DATE).map(str::to_string),
    })
}

fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(String::as_str).filter(|s| !s.is_empty())
}
