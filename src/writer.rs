use crate::error::I18nResult;
use crate::types::I18nMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Create the parent directory of `path` (recursively) if it is missing
pub fn ensure_parent_dir(path: &Path) -> I18nResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!(dir = %parent.display(), "Creating output directory");
            // create_dir_all tolerates a concurrent creator
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Render a map as pretty JSON (2-space indent)
pub fn to_pretty_json(map: &I18nMap) -> I18nResult<String> {
    Ok(serde_json::to_string_pretty(map)?)
}

/// Write a map as pretty UTF-8 JSON, creating the parent directory first
pub fn write_json_map(path: &Path, map: &I18nMap) -> I18nResult<()> {
    let json = to_pretty_json(map)?;
    ensure_parent_dir(path)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_pretty_json_two_space_indent() {
        let map = I18nMap::try_from_pairs([("hello", "Hello World"), ("welcome", "Welcome")]).unwrap();
        let json = to_pretty_json(&map).unwrap();
        assert_eq!(
            json,
            "{\n  \"hello\": \"Hello World\",\n  \"welcome\": \"Welcome\"\n}"
        );
    }

    #[test]
    fn test_pretty_json_empty_map() {
        assert_eq!(to_pretty_json(&I18nMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_write_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("i18n.json");
        let map = I18nMap::try_from_pairs([("k", "v")]).unwrap();

        write_json_map(&path, &map).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"k\": \"v\"\n}");
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("i18n.json")).is_ok());
    }
}
