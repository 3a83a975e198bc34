//! Load an xlsx file into a [`Workbook`] grid and write changed cells back.
//!
//! The spreadsheet engine keeps the existing file structure (styles, merged
//! ranges, formulas); only coordinates recorded as changed on the grid are
//! pushed back before saving.

use std::path::{Path, PathBuf};

use hemaflag_model::{CellValue, Sheet, Workbook};
use tracing::{debug, info};
use umya_spreadsheet::{Cell, Spreadsheet, Worksheet};

use crate::error::{Result, XlsxError};

pub struct XlsxDocument {
    source: PathBuf,
    book: Spreadsheet,
    workbook: Workbook,
}

impl XlsxDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|source| XlsxError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let sheets: Vec<Sheet> = book.get_sheet_collection().iter().map(read_sheet).collect();
        info!(
            path = %path.display(),
            sheets = sheets.len(),
            "workbook loaded"
        );
        Ok(Self {
            source: path.to_path_buf(),
            book,
            workbook: Workbook::new(sheets),
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    pub fn workbook_mut(&mut self) -> &mut Workbook {
        &mut self.workbook
    }

    /// Push changed cells into the workbook and save it to `path`.
    ///
    /// Returns the number of cells written.
    pub fn save(mut self, path: &Path) -> Result<usize> {
        let written = self.apply_changes()?;
        umya_spreadsheet::writer::xlsx::write(&self.book, path).map_err(|source| {
            XlsxError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), cells = written, "workbook saved");
        Ok(written)
    }

    fn apply_changes(&mut self) -> Result<usize> {
        let mut written = 0;
        for (index, sheet) in self.workbook.sheets.iter().enumerate() {
            if sheet.changed_count() == 0 {
                continue;
            }
            let worksheet =
                self.book
                    .get_sheet_mut(&index)
                    .ok_or_else(|| XlsxError::MissingSheet {
                        index,
                        name: sheet.name().to_string(),
                    })?;
            for (row, column, value) in sheet.changed_cells() {
                write_value(worksheet.get_cell_mut((column, row)), value);
                written += 1;
            }
            debug!(sheet = sheet.name(), cells = sheet.changed_count(), "sheet written back");
        }
        Ok(written)
    }
}

fn read_sheet(worksheet: &Worksheet) -> Sheet {
    let (max_column, max_row) = worksheet.get_highest_column_and_row();
    let rows = (1..=max_row)
        .map(|row| {
            (1..=max_column)
                .map(|column| {
                    worksheet
                        .get_cell((column, row))
                        .map(read_value)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    Sheet::from_rows(worksheet.get_name(), rows)
}

fn read_value(cell: &Cell) -> CellValue {
    if let Some(number) = cell.get_value_number() {
        return CellValue::Number(number);
    }
    let text = cell.get_value();
    match cell.get_data_type() {
        "b" => CellValue::Bool(text.eq_ignore_ascii_case("TRUE") || text == "1"),
        _ if text.is_empty() => CellValue::Empty,
        _ => CellValue::Text(text.into_owned()),
    }
}

fn write_value(cell: &mut Cell, value: &CellValue) {
    match value {
        CellValue::Empty => {
            cell.set_value_string("");
        }
        CellValue::Text(text) => {
            cell.set_value_string(text.as_str());
        }
        CellValue::Number(number) => {
            cell.set_value_number(*number);
        }
        CellValue::Bool(flag) => {
            cell.set_value_bool(*flag);
        }
    }
}
