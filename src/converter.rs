//! End-to-end conversions: spreadsheet → JSON map and map/JSON → spreadsheet

use crate::core::{
    extract_entries, find_duplicate_keys, to_map, to_rows, Clock, SystemClock,
};
use crate::error::{I18nError, I18nResult};
use crate::excel::{TabularCodec, XlsxCodec};
use crate::parser::read_json_pairs;
use crate::types::{I18nMap, SHEET_NAME};
use crate::writer::{ensure_parent_dir, write_json_map};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Where `generate` takes its mapping from
#[derive(Debug, Clone)]
pub enum GenerateSource {
    /// An in-memory mapping, used as is
    Map(I18nMap),
    /// A JSON file holding a flat string map
    File(PathBuf),
}

impl From<I18nMap> for GenerateSource {
    fn from(map: I18nMap) -> Self {
        GenerateSource::Map(map)
    }
}

impl From<PathBuf> for GenerateSource {
    fn from(path: PathBuf) -> Self {
        GenerateSource::File(path)
    }
}

impl From<&Path> for GenerateSource {
    fn from(path: &Path) -> Self {
        GenerateSource::File(path.to_path_buf())
    }
}

/// Stateless conversion service over a sheet codec and a date source
pub struct I18nConverter<C, K> {
    codec: C,
    clock: K,
}

impl I18nConverter<XlsxCodec, SystemClock> {
    /// .xlsx files, local system date
    pub fn xlsx() -> Self {
        Self::new(XlsxCodec, SystemClock)
    }
}

impl<C: TabularCodec, K: Clock> I18nConverter<C, K> {
    pub fn new(codec: C, clock: K) -> Self {
        Self { codec, clock }
    }

    /// Spreadsheet → map, optionally written as pretty JSON.
    ///
    /// Fails with `DuplicateKeys` before anything is written if two
    /// surviving rows share a key.
    pub fn parse(&self, source: &Path, destination: Option<&Path>) -> I18nResult<I18nMap> {
        if !source.exists() {
            return Err(I18nError::FileNotFound(source.to_path_buf()));
        }

        let rows = self.codec.decode(source)?;
        let data_rows = rows.get(1..).unwrap_or_default();
        let entries = extract_entries(data_rows);

        let duplicates = find_duplicate_keys(&entries);
        if !duplicates.is_empty() {
            error!(duplicates = %duplicates.join(", "), "Duplicate i18n keys found");
            return Err(I18nError::DuplicateKeys(duplicates));
        }

        let map = to_map(&entries);
        info!(
            source = %source.display(),
            rows = data_rows.len(),
            keys = map.len(),
            "Parsed i18n sheet"
        );

        if let Some(destination) = destination {
            write_json_map(destination, &map)?;
            info!(path = %destination.display(), "i18n JSON written");
        }

        Ok(map)
    }

    /// Map or JSON file → spreadsheet with a single `i18n` worksheet
    pub fn generate(&self, source: impl Into<GenerateSource>, destination: &Path) -> I18nResult<()> {
        let map = Self::resolve(source.into())?;

        let rows = to_rows(&map, &self.clock);

        ensure_parent_dir(destination)?;
        self.codec.encode(&rows, SHEET_NAME, destination)?;
        info!(path = %destination.display(), keys = map.len(), "i18n sheet generated");

        Ok(())
    }

    fn resolve(source: GenerateSource) -> I18nResult<I18nMap> {
        match source {
            GenerateSource::Map(map) => Ok(map),
            GenerateSource::File(path) => {
                let pairs = read_json_pairs(&path)?.into_inner();

                // Tolerated like a plain JSON parser would: last value wins
                for key in find_duplicate_keys(&pairs) {
                    warn!(path = %path.display(), key = %key, "Repeated key in JSON, keeping last value");
                }

                let mut map = I18nMap::new();
                for (key, content) in pairs {
                    if key.is_empty() {
                        warn!(path = %path.display(), content = %content, "Empty key in JSON, entry skipped");
                        continue;
                    }
                    map.insert(key, content);
                }
                Ok(map)
            }
        }
    }
}
