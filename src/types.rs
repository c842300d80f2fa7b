use crate::error::I18nResult;
use indexmap::IndexMap;
use serde::Serialize;

//==============================================================================
// Sheet layout
//==============================================================================

/// Header row of every i18n sheet. Never interpreted as data.
pub const HEADER: [&str; 4] = ["key", "IContent", "Remark", "Last Update Date"];

/// Worksheet name used when generating a spreadsheet
pub const SHEET_NAME: &str = "i18n";

/// Column positions inside a [`SheetRow`]
pub mod column {
    pub const KEY: usize = 0;
    pub const CONTENT: usize = 1;
    pub const REMARK: usize = 2;
    pub const LAST_UPDATE_DATE: usize = 3;
}

/// One row of raw cell strings. Trailing cells may be missing.
pub type SheetRow = Vec<String>;

/// Build the header row as owned cells
pub fn header_row() -> SheetRow {
    HEADER.iter().map(|cell| cell.to_string()).collect()
}

//==============================================================================
// Entries
//==============================================================================

/// One record extracted from a data row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    #[serde(rename = "IContent")]
    pub content: String,
    #[serde(rename = "Remark", skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(
        rename = "Last Update Date",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update_date: Option<String>,
}

impl Entry {
    pub fn new(key: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            content: content.into(),
            remark: None,
            last_update_date: None,
        }
    }

    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    pub fn with_last_update_date(mut self, date: impl Into<String>) -> Self {
        self.last_update_date = Some(date.into());
        self
    }
}

/// Anything that carries an i18n key. Empty keys never take part in
/// uniqueness checks.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Entry {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Keyed for (String, String) {
    fn key(&self) -> &str {
        &self.0
    }
}

//==============================================================================
// I18nMap
//==============================================================================

/// Flat `key -> content` mapping, kept in insertion order.
///
/// There is no public insertion path: a map is either projected from an
/// entry list that already passed the duplicate check, or built through
/// [`I18nMap::try_from_pairs`], which runs that check itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct I18nMap {
    inner: IndexMap<String, String>,
}

impl I18nMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from ordered pairs, rejecting empty and repeated keys
    pub fn try_from_pairs<I, K, V>(pairs: I) -> I18nResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        if let Some((_, content)) = pairs.iter().find(|(key, _)| key.is_empty()) {
            return Err(crate::error::I18nError::EmptyKey(content.clone()));
        }

        let duplicates = crate::core::find_duplicate_keys(&pairs);
        if !duplicates.is_empty() {
            return Err(crate::error::I18nError::DuplicateKeys(duplicates));
        }

        let mut map = Self::new();
        for (key, content) in pairs {
            map.insert(key, content);
        }
        Ok(map)
    }

    /// Insert or overwrite. Callers must have run the duplicate check on
    /// their ordered source first.
    pub(crate) fn insert(&mut self, key: String, content: String) {
        self.inner.insert(key, content);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for I18nMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;

    #[test]
    fn test_header_row_matches_layout() {
        let header = header_row();
        assert_eq!(header[column::KEY], "key");
        assert_eq!(header[column::CONTENT], "IContent");
        assert_eq!(header[column::REMARK], "Remark");
        assert_eq!(header[column::LAST_UPDATE_DATE], "Last Update Date");
    }

    #[test]
    fn test_try_from_pairs_keeps_order() {
        let map = I18nMap::try_from_pairs([("b", "B"), ("a", "A"), ("c", "C")]).unwrap();
        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(map.get("a"), Some("A"));
    }

    #[test]
    fn test_try_from_pairs_rejects_repeated_keys() {
        let result = I18nMap::try_from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        match result {
            Err(I18nError::DuplicateKeys(keys)) => assert_eq!(keys, vec!["a"]),
            other => panic!("Expected DuplicateKeys, got {:?}", other),
        }
    }

    #[test]
    fn test_try_from_pairs_rejects_empty_keys() {
        let result = I18nMap::try_from_pairs([("", "a"), ("", "b"), ("k", "v")]);
        match result {
            Err(I18nError::EmptyKey(content)) => assert_eq!(content, "a"),
            other => panic!("Expected EmptyKey, got {:?}", other),
        }

        assert!(matches!(
            I18nMap::try_from_pairs([("k", "v"), ("", "lonely")]),
            Err(I18nError::EmptyKey(_))
        ));
    }

    #[test]
    fn test_map_serializes_as_flat_object() {
        let map = I18nMap::try_from_pairs([("hello", "Hello"), ("bye", "Bye")]).unwrap();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"hello":"Hello","bye":"Bye"}"#);
    }

    #[test]
    fn test_entry_serializes_with_sheet_column_names() {
        let entry = Entry::new("hello", "Hello").with_remark("Admin");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["IContent"], "Hello");
        assert_eq!(json["Remark"], "Admin");
        assert!(json.get("Last Update Date").is_none());
    }
}
