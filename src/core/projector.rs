//! Entry list <-> I18nMap <-> sheet rows

use crate::core::clock::Clock;
use crate::types::{header_row, Entry, I18nMap, SheetRow};

/// Project entries into a map, in order.
///
/// A repeated key overwrites the earlier value, so callers run
/// [`find_duplicate_keys`](crate::core::find_duplicate_keys) first.
pub fn to_map(entries: &[Entry]) -> I18nMap {
    let mut map = I18nMap::new();
    for entry in entries {
        map.insert(entry.key.clone(), entry.content.clone());
    }
    map
}

/// Project a map into sheet rows, header first.
///
/// Every data row is `[key, content, "", today]`.
pub fn to_rows<K: Clock + ?Sized>(map: &I18nMap, clock: &K) -> Vec<SheetRow> {
    let today = clock.today_string();

    let mut rows = Vec::with_capacity(map.len() + 1);
    rows.push(header_row());
    rows.extend(map.iter().map(|(key, content)| {
        vec![
            key.to_string(),
            content.to_string(),
            String::new(),
            today.clone(),
        ]
    }));
    rows
}
