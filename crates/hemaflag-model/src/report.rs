//! Per-sheet change counters collected by the passes.

use serde::{Deserialize, Serialize};

use crate::disease::SlotOutcome;
use crate::marker::{Marker, Profile};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseCounts {
    pub promoted: usize,
    pub filled: usize,
    pub merged: usize,
    pub already_present: usize,
}

impl DiseaseCounts {
    pub fn record(&mut self, outcome: SlotOutcome) {
        match outcome {
            SlotOutcome::AlreadyPresent => self.already_present += 1,
            SlotOutcome::Promoted => self.promoted += 1,
            SlotOutcome::Filled(_) => self.filled += 1,
            SlotOutcome::Merged => self.merged += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetReport {
    pub sheet: String,
    /// Markers whose status column was found in this sheet.
    pub markers_resolved: Vec<Marker>,
    pub awbc_rows: usize,
    pub srbc_rows: usize,
    pub prompts_filled: usize,
    pub texts_fused: usize,
    pub diseases: DiseaseCounts,
    pub english_fixes: usize,
    pub aly_fixes: usize,
    pub cells_changed: usize,
}

impl SheetReport {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            ..Self::default()
        }
    }

    pub fn record_flag(&mut self, marker: Marker) {
        match marker {
            Marker::Awbc => self.awbc_rows += 1,
            Marker::Srbc => self.srbc_rows += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub profile: Profile,
    pub sheets: Vec<SheetReport>,
}

impl RunReport {
    pub fn cells_changed(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.cells_changed).sum()
    }

    pub fn flagged_rows(&self) -> usize {
        self.sheets
            .iter()
            .map(|sheet| sheet.awbc_rows + sheet.srbc_rows)
            .sum()
    }
}
