//! Key uniqueness checks on maps and JSON sources

use crate::core::duplicates::find_duplicate_keys;
use crate::error::I18nResult;
use crate::parser::{parse_json_pairs, read_json_pairs};
use crate::types::I18nMap;
use std::collections::HashSet;
use std::path::Path;
use tracing::{error, info};

/// Outcome of checking a JSON file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationReport {
    /// File does not exist; nothing to check
    Skipped,
    /// All keys unique
    Valid { keys: usize },
    /// Keys that occur more than once, in second-occurrence order
    Duplicates { keys: Vec<String> },
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        !matches!(self, ValidationReport::Duplicates { .. })
    }
}

/// True when the map's key set has no collisions.
///
/// A constructed [`I18nMap`] cannot hold a key twice, so this only fails if
/// that guarantee is broken. Use [`validate_json_keys`] for raw sources.
pub fn validate_unique_keys(map: &I18nMap) -> bool {
    let unique: HashSet<&str> = map.keys().collect();
    if unique.len() != map.len() {
        error!("i18n map contains duplicate keys");
        return false;
    }
    true
}

/// Repeated keys in a JSON document, before any map collapses them
pub fn validate_json_keys(text: &str) -> I18nResult<Vec<String>> {
    let pairs = parse_json_pairs(text)?;
    Ok(find_duplicate_keys(&pairs.0))
}

/// Check a JSON file. A missing file is skipped, not an error.
pub fn validate_file(path: &Path) -> I18nResult<ValidationReport> {
    if !path.exists() {
        info!(path = %path.display(), "i18n file not found, validation skipped");
        return Ok(ValidationReport::Skipped);
    }

    let pairs = read_json_pairs(path)?;
    let duplicates = find_duplicate_keys(&pairs.0);

    if duplicates.is_empty() {
        info!(path = %path.display(), keys = pairs.0.len(), "i18n keys are unique");
        Ok(ValidationReport::Valid {
            keys: pairs.0.len(),
        })
    } else {
        error!(path = %path.display(), duplicates = %duplicates.join(", "), "Duplicate i18n keys");
        Ok(ValidationReport::Duplicates { keys: duplicates })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::I18nError;
    use tempfile::TempDir;

    #[test]
    fn test_validate_unique_keys_on_map() {
        let map = I18nMap::try_from_pairs([("hello", "Hello World"), ("welcome", "Welcome")]).unwrap();
        assert!(validate_unique_keys(&map));
    }

    #[test]
    fn test_validate_unique_keys_edge_cases() {
        assert!(validate_unique_keys(&I18nMap::new()));

        let single = I18nMap::try_from_pairs([("hello", "Hello World")]).unwrap();
        assert!(validate_unique_keys(&single));
    }

    #[test]
    fn test_validate_json_keys_finds_collisions() {
        let text = r#"{"a": "1", "b": "2", "a": "3", "b": "4", "a": "5"}"#;
        assert_eq!(validate_json_keys(text).unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_validate_json_keys_clean() {
        assert!(validate_json_keys(r#"{"a": "1", "b": "2"}"#).unwrap().is_empty());
    }

    #[test]
    fn test_validate_json_keys_malformed() {
        assert!(matches!(validate_json_keys("{"), Err(I18nError::Parse(_))));
    }

    #[test]
    fn test_validate_file_missing_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let report = validate_file(&temp_dir.path().join("i18n.json")).unwrap();
        assert_eq!(report, ValidationReport::Skipped);
        assert!(report.is_ok());
    }

    #[test]
    fn test_validate_file_reports() {
        let temp_dir = TempDir::new().unwrap();

        let clean = temp_dir.path().join("clean.json");
        std::fs::write(&clean, r#"{"a": "1", "b": "2"}"#).unwrap();
        assert_eq!(
            validate_file(&clean).unwrap(),
            ValidationReport::Valid { keys: 2 }
        );

        let dirty = temp_dir.path().join("dirty.json");
        std::fs::write(&dirty, r#"{"a": "1", "a": "2"}"#).unwrap();
        let report = validate_file(&dirty).unwrap();
        assert_eq!(
            report,
            ValidationReport::Duplicates {
                keys: vec!["a".to_string()]
            }
        );
        assert!(!report.is_ok());
    }
}
