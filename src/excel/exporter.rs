//! Sheet exporter implementation - rows of cell strings → Excel (.xlsx)

use crate::error::{I18nError, I18nResult};
use crate::types::SheetRow;
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// Writes rows into a single named worksheet
pub struct SheetExporter {
    sheet_name: String,
}

impl SheetExporter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    /// Export rows to an .xlsx file. Every cell is written as text.
    pub fn export(&self, rows: &[SheetRow], output_path: &Path) -> I18nResult<()> {
        let mut workbook = self.build_workbook(rows)?;

        workbook
            .save(output_path)
            .map_err(|e| I18nError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }

    fn build_workbook(&self, rows: &[SheetRow]) -> I18nResult<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name).map_err(|e| {
            I18nError::Export(format!(
                "Failed to set worksheet name '{}': {}",
                self.sheet_name, e
            ))
        })?;

        Self::write_rows(worksheet, rows)?;
        Ok(workbook)
    }

    fn write_rows(worksheet: &mut Worksheet, rows: &[SheetRow]) -> I18nResult<()> {
        for (row_idx, row) in rows.iter().enumerate() {
            let excel_row = u32::try_from(row_idx)
                .map_err(|_| I18nError::Export(format!("Too many rows: {}", rows.len())))?;

            for (col_idx, value) in row.iter().enumerate() {
                let excel_col = u16::try_from(col_idx)
                    .map_err(|_| I18nError::Export(format!("Too many columns: {}", row.len())))?;

                worksheet
                    .write_string(excel_row, excel_col, value)
                    .map_err(|e| I18nError::Export(format!("Failed to write cell: {}", e)))?;
            }
        }
        Ok(())
    }
}
