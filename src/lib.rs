//! i18n-forge - spreadsheet ⇄ JSON converter for localized text bundles
//!
//! Reads an i18n sheet (`key | IContent | Remark | Last Update Date`) into a
//! flat `key -> content` JSON map, and generates the sheet back from a map.
//! Keys must be unique; incomplete rows are skipped with a warning.
//!
//! # Example
//!
//! ```no_run
//! use i18n_forge::I18nConverter;
//! use std::path::Path;
//!
//! let converter = I18nConverter::xlsx();
//! let map = converter.parse(
//!     Path::new("i18n/input/i18n.xlsx"),
//!     Some(Path::new("i18n/output/i18n.json")),
//! )?;
//! println!("Keys: {}", map.len());
//!
//! converter.generate(map, Path::new("i18n/output/i18n.xlsx"))?;
//! # Ok::<(), i18n_forge::error::I18nError>(())
//! ```

pub mod cli;
pub mod config;
pub mod converter;
pub mod core;
pub mod error;
pub mod excel;
pub mod parser;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use converter::{GenerateSource, I18nConverter};
pub use error::{I18nError, I18nResult};
pub use types::{Entry, I18nMap, SheetRow};
