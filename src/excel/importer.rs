//! Sheet importer implementation - Excel (.xlsx) → rows of cell strings

use crate::core::clock::DATE_FORMAT;
use crate::error::{I18nError, I18nResult};
use crate::types::SheetRow;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Reads the first worksheet of an .xlsx file as raw cell strings
pub struct SheetImporter {
    path: std::path::PathBuf,
}

impl SheetImporter {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Import the first worksheet. An empty workbook yields no rows.
    pub fn import(&self) -> I18nResult<Vec<SheetRow>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path)
            .map_err(|e| I18nError::Import(format!("Failed to open Excel file: {}", e)))?;

        let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
            return Ok(Vec::new());
        };

        let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
            I18nError::Import(format!("Failed to read worksheet '{}': {}", sheet_name, e))
        })?;

        Ok(Self::range_to_rows(&range))
    }

    fn range_to_rows(range: &Range<Data>) -> Vec<SheetRow> {
        range
            .rows()
            .map(|cells| {
                let mut row: SheetRow = cells.iter().map(Self::cell_to_string).collect();
                // Ragged rows: drop trailing blanks so absent cells stay absent
                while row.last().is_some_and(|c| c.is_empty()) {
                    row.pop();
                }
                row
            })
            .collect()
    }

    /// Display text of a cell, never coerced to a number.
    /// Date cells come back as dates, not as Excel serial numbers.
    fn cell_to_string(cell: &Data) -> String {
        match cell {
            Data::Empty => String::new(),
            Data::String(s) => s.clone(),
            Data::DateTime(dt) if !dt.is_duration() => dt
                .as_datetime()
                .map(Self::format_datetime)
                .unwrap_or_else(|| dt.to_string()),
            Data::DateTimeIso(s) => s
                .parse::<NaiveDateTime>()
                .map(Self::format_datetime)
                .or_else(|_| s.parse::<NaiveDate>().map(|d| d.format(DATE_FORMAT).to_string()))
                .unwrap_or_else(|_| s.clone()),
            other => other.to_string(),
        }
    }

    fn format_datetime(dt: NaiveDateTime) -> String {
        if dt.time() == NaiveTime::MIN {
            dt.format(DATE_FORMAT).to_string()
        } else {
            dt.format("%Y-%m-%d %H:%M:%S").to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::{ExcelDateTime, ExcelDateTimeType};

    #[test]
    fn test_cell_to_string() {
        assert_eq!(SheetImporter::cell_to_string(&Data::Empty), "");
        assert_eq!(
            SheetImporter::cell_to_string(&Data::String("Hello".to_string())),
            "Hello"
        );
        assert_eq!(SheetImporter::cell_to_string(&Data::Int(42)), "42");
        assert_eq!(SheetImporter::cell_to_string(&Data::Float(1.5)), "1.5");
        assert_eq!(SheetImporter::cell_to_string(&Data::Bool(true)), "true");
    }

    #[test]
    fn test_cell_to_string_dates() {
        // 45292 is 2024-01-01 in the 1900 date system
        let date = Data::DateTime(ExcelDateTime::new(
            45292.0,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(SheetImporter::cell_to_string(&date), "2024-01-01");

        let noon = Data::DateTime(ExcelDateTime::new(
            45292.5,
            ExcelDateTimeType::DateTime,
            false,
        ));
        assert_eq!(SheetImporter::cell_to_string(&noon), "2024-01-01 12:00:00");

        assert_eq!(
            SheetImporter::cell_to_string(&Data::DateTimeIso("2024-06-01T00:00:00".to_string())),
            "2024-06-01"
        );
        assert_eq!(
            SheetImporter::cell_to_string(&Data::DateTimeIso("2024-06-01".to_string())),
            "2024-06-01"
        );
        assert_eq!(
            SheetImporter::cell_to_string(&Data::DateTimeIso("not a date".to_string())),
            "not a date"
        );
    }

    #[test]
    fn test_range_to_rows_trims_trailing_blanks() {
        let mut range: Range<Data> = Range::new((0, 0), (1, 3));
        range.set_value((0, 0), Data::String("key".to_string()));
        range.set_value((0, 1), Data::String("IContent".to_string()));
        range.set_value((1, 0), Data::String("k1".to_string()));
        range.set_value((1, 1), Data::String("v1".to_string()));

        let rows = SheetImporter::range_to_rows(&range);

        assert_eq!(rows, vec![vec!["key", "IContent"], vec!["k1", "v1"]]);
    }

    #[test]
    fn test_import_missing_file_is_import_error() {
        let importer = SheetImporter::new("definitely/not/here.xlsx");
        assert!(matches!(importer.import(), Err(I18nError::Import(_))));
    }
}
