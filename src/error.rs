use std::path::PathBuf;
use thiserror::Error;

pub type I18nResult<T> = Result<T, I18nError>;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Duplicate i18n keys: {}", .0.join(", "))]
    DuplicateKeys(Vec<String>),

    #[error("Empty i18n key (content: {0:?})")]
    EmptyKey(String),

    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel import error: {0}")]
    Import(String),

    #[error("Excel export error: {0}")]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_names_path() {
        let err = I18nError::FileNotFound(PathBuf::from("i18n/output/missing.json"));
        assert!(err.to_string().contains("i18n/output/missing.json"));
    }

    #[test]
    fn test_duplicate_keys_joined_in_order() {
        let err = I18nError::DuplicateKeys(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(err.to_string(), "Duplicate i18n keys: a, b");
    }

    #[test]
    fn test_empty_key_shows_content() {
        let err = I18nError::EmptyKey("orphan".to_string());
        assert_eq!(err.to_string(), "Empty i18n key (content: \"orphan\")");
    }

    #[test]
    fn test_parse_error_keeps_parser_message() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let message = json_err.to_string();
        let err = I18nError::from(json_err);
        assert!(err.to_string().contains(&message));
    }
}
