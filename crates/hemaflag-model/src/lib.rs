//! Data types for the hemaflag lab report augmenter.

pub mod cell;
pub mod disease;
pub mod error;
pub mod marker;
pub mod report;
pub mod sheet;

pub use cell::CellValue;
pub use disease::{
    DiseaseDescriptor, DiseaseSlot, DiseaseSlots, Priority, SLOT_COUNT, SLOT_WIDTH, SlotOutcome,
};
pub use error::{ModelError, Result};
pub use marker::{Marker, MarkerTemplate, Profile, Reference, UP_INDICATOR};
pub use report::{DiseaseCounts, RunReport, SheetReport};
pub use sheet::{FIRST_DATA_ROW, HEADER_ROW, HeaderIndex, Sheet, Workbook};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_report_totals() {
        let mut first = SheetReport::new("血常规");
        first.record_flag(Marker::Awbc);
        first.record_flag(Marker::Srbc);
        first.cells_changed = 7;
        let mut second = SheetReport::new("复查");
        second.record_flag(Marker::Srbc);
        second.cells_changed = 2;
        let report = RunReport {
            profile: Profile::V1,
            sheets: vec![first, second],
        };
        assert_eq!(report.flagged_rows(), 3);
        assert_eq!(report.cells_changed(), 9);
    }

    #[test]
    fn run_report_serializes() {
        let mut sheet = SheetReport::new("S");
        sheet.diseases.record(SlotOutcome::Filled(1));
        let report = RunReport {
            profile: Profile::V2,
            sheets: vec![sheet],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        assert!(json.contains("\"profile\":\"v2\""));
        let round: RunReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.sheets[0].diseases.filled, 1);
    }
}
