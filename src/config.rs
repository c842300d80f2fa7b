//! Conventional file locations, passed explicitly to every command

use std::path::PathBuf;

pub const DEFAULT_EXCEL_INPUT: &str = "i18n/input/i18n.xlsx";
pub const DEFAULT_JSON_OUTPUT: &str = "i18n/output/i18n.json";
pub const DEFAULT_EXCEL_OUTPUT: &str = "i18n/output/i18n.xlsx";

/// Input/output locations for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub excel_input: PathBuf,
    pub json_output: PathBuf,
    pub excel_output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            excel_input: PathBuf::from(DEFAULT_EXCEL_INPUT),
            json_output: PathBuf::from(DEFAULT_JSON_OUTPUT),
            excel_output: PathBuf::from(DEFAULT_EXCEL_OUTPUT),
        }
    }
}

impl Paths {
    /// Resolve the defaults relative to `root`
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let defaults = Self::default();
        Self {
            excel_input: root.join(defaults.excel_input),
            json_output: root.join(defaults.json_output),
            excel_output: root.join(defaults.excel_output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = Paths::default();
        assert_eq!(paths.excel_input, PathBuf::from("i18n/input/i18n.xlsx"));
        assert_eq!(paths.json_output, PathBuf::from("i18n/output/i18n.json"));
        assert_eq!(paths.excel_output, PathBuf::from("i18n/output/i18n.xlsx"));
    }

    #[test]
    fn test_paths_under_root() {
        let paths = Paths::under("/work/app");
        assert_eq!(
            paths.json_output,
            PathBuf::from("/work/app/i18n/output/i18n.json")
        );
    }
}
