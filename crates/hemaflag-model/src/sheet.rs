//! In-memory worksheet grid.
//!
//! Rows and columns are 1-based, matching spreadsheet addressing. Cells are
//! never removed; writes overwrite in place and every changed coordinate is
//! tracked so a writer can persist only what the passes touched.

use std::collections::{BTreeMap, BTreeSet};

use crate::cell::CellValue;

/// Row holding the header labels.
pub const HEADER_ROW: u32 = 1;
/// First data row; row 2 is a units/sub-header row and is never processed.
pub const FIRST_DATA_ROW: u32 = 3;

static EMPTY_CELL: CellValue = CellValue::Empty;

#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<CellValue>>,
    max_column: u32,
    changed: BTreeSet<(u32, u32)>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Build a sheet from row-major values, starting at row 1.
    ///
    /// The used column range is the widest row. Nothing is marked as changed.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let max_column = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        Self {
            name: name.into(),
            rows,
            max_column,
            changed: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_row(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn max_column(&self) -> u32 {
        self.max_column
    }

    /// Data rows (row 3 up to the last used row).
    pub fn data_rows(&self) -> std::ops::RangeInclusive<u32> {
        FIRST_DATA_ROW..=self.max_row()
    }

    /// Read a cell; coordinates outside the grid read as empty.
    pub fn cell(&self, row: u32, column: u32) -> &CellValue {
        if row == 0 || column == 0 {
            return &EMPTY_CELL;
        }
        self.rows
            .get(row as usize - 1)
            .and_then(|cells| cells.get(column as usize - 1))
            .unwrap_or(&EMPTY_CELL)
    }

    /// Write a cell, growing the grid when needed.
    ///
    /// Returns `false` (and records nothing) when the value is unchanged or
    /// the coordinate is not 1-based.
    pub fn set(&mut self, row: u32, column: u32, value: CellValue) -> bool {
        if row == 0 || column == 0 || *self.cell(row, column) == value {
            return false;
        }
        let row_idx = row as usize - 1;
        let col_idx = column as usize - 1;
        if self.rows.len() <= row_idx {
            self.rows.resize_with(row_idx + 1, Vec::new);
        }
        let cells = &mut self.rows[row_idx];
        if cells.len() <= col_idx {
            cells.resize_with(col_idx + 1, CellValue::default);
        }
        cells[col_idx] = value;
        self.max_column = self.max_column.max(column);
        self.changed.insert((row, column));
        true
    }

    /// Coordinates of every text cell, in row-major order.
    pub fn text_cells(&self) -> Vec<(u32, u32)> {
        let mut coords = Vec::new();
        for (row_idx, cells) in self.rows.iter().enumerate() {
            for (col_idx, value) in cells.iter().enumerate() {
                if matches!(value, CellValue::Text(_)) {
                    coords.push((row_idx as u32 + 1, col_idx as u32 + 1));
                }
            }
        }
        coords
    }

    /// Changed cells with their current values, in row-major order.
    pub fn changed_cells(&self) -> impl Iterator<Item = (u32, u32, &CellValue)> + '_ {
        self.changed
            .iter()
            .map(|&(row, column)| (row, column, self.cell(row, column)))
    }

    pub fn changed_count(&self) -> usize {
        self.changed.len()
    }

    /// Header labels from row 1, first occurrence wins.
    pub fn header_index(&self) -> HeaderIndex {
        let mut index = BTreeMap::new();
        for column in 1..=self.max_column {
            if let CellValue::Text(label) = self.cell(HEADER_ROW, column) {
                index.entry(label.clone()).or_insert(column);
            }
        }
        HeaderIndex { columns: index }
    }
}

/// Header label to 1-based column position for a single sheet.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    columns: BTreeMap<String, u32>,
}

impl HeaderIndex {
    pub fn column(&self, label: &str) -> Option<u32> {
        self.columns.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Ordered collection of sheets loaded from one file.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn changed_count(&self) -> usize {
        self.sheets.iter().map(Sheet::changed_count).sum()
    }
}
