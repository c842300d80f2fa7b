//! Spreadsheet codec for i18n sheets
//!
//! - Import: first worksheet of an .xlsx → rows of cell strings
//! - Export: rows of cell strings → single named worksheet

mod exporter;
mod importer;

pub use exporter::SheetExporter;
pub use importer::SheetImporter;

use crate::error::I18nResult;
use crate::types::SheetRow;
use std::path::Path;

/// Reads and writes a sheet as a 2-D array of cell strings
pub trait TabularCodec {
    /// Decode the first worksheet, header row included
    fn decode(&self, path: &Path) -> I18nResult<Vec<SheetRow>>;

    /// Encode rows into a single worksheet named `sheet_name`
    fn encode(&self, rows: &[SheetRow], sheet_name: &str, path: &Path) -> I18nResult<()>;
}

/// .xlsx codec backed by calamine (read) and rust_xlsxwriter (write)
#[derive(Debug, Clone, Copy, Default)]
pub struct XlsxCodec;

impl TabularCodec for XlsxCodec {
    fn decode(&self, path: &Path) -> I18nResult<Vec<SheetRow>> {
        SheetImporter::new(path).import()
    }

    fn encode(&self, rows: &[SheetRow], sheet_name: &str, path: &Path) -> I18nResult<()> {
        SheetExporter::new(sheet_name).export(rows, path)
    }
}
