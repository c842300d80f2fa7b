use crate::types::Keyed;
use std::collections::{HashMap, HashSet};

/// Keys that occur more than once, each reported once, in the order of
/// their second occurrence. Empty keys are ignored.
///
/// `[a, b, a, c, b]` yields `[a, b]`.
pub fn find_duplicate_keys<T: Keyed>(items: &[T]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();

    for key in items.iter().map(|item| item.key()).filter(|k| !k.is_empty()) {
        let count = counts.entry(key).or_insert(0);
        *count += 1;
        if *count == 2 {
            duplicates.push(key.to_string());
        }
    }

    duplicates
}

/// First occurrence of every non-empty key, in original relative order
pub fn find_unique_items<T: Keyed + Clone>(items: &[T]) -> Vec<T> {
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .iter()
        .filter(|item| {
            let key = (*item).key();
            !key.is_empty() && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// True when at least one non-empty key repeats
pub fn has_duplicates<T: Keyed>(items: &[T]) -> bool {
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .iter()
        .map(|item| item.key())
        .filter(|k| !k.is_empty())
        .any(|k| !seen.insert(k))
}
