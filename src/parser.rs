//! JSON source reading
//!
//! i18n JSON files are flat objects of string keys to string values. They are
//! read as ordered `(key, value)` pairs so that a key written twice in the
//! file stays visible to the duplicate check instead of being overwritten.

use crate::error::{I18nError, I18nResult};
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::path::Path;

/// Key/value pairs of a JSON object, in source order, repeats included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedPairs(pub Vec<(String, String)>);

impl OrderedPairs {
    pub fn into_inner(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<'de> Deserialize<'de> for OrderedPairs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = OrderedPairs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object mapping string keys to string values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    pairs.push((key, value));
                }
                Ok(OrderedPairs(pairs))
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

/// Parse JSON text into ordered pairs
pub fn parse_json_pairs(text: &str) -> I18nResult<OrderedPairs> {
    Ok(serde_json::from_str(text)?)
}

/// Read a JSON file into ordered pairs. A missing file is `FileNotFound`.
pub fn read_json_pairs(path: &Path) -> I18nResult<OrderedPairs> {
    if !path.exists() {
        return Err(I18nError::FileNotFound(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path)?;
    parse_json_pairs(&text)
}
