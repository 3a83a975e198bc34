//! Per-sheet pass ordering for a whole workbook.

use hemaflag_model::{Profile, RunReport, Sheet, SheetReport, Workbook};
use tracing::{info, info_span};

use crate::cleanup::{cleanup_english_sheet, fix_aly_sheet};
use crate::scanner::update_sheet;

/// Which passes run and with which template profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub profile: Profile,
    /// Marker scan, text fusion and disease ranking.
    pub update_markers: bool,
    pub cleanup_english: bool,
    pub fix_aly: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            update_markers: true,
            cleanup_english: false,
            fix_aly: false,
        }
    }
}

impl RunOptions {
    /// True when no pass is enabled and the workbook would be copied as-is.
    pub fn is_noop(&self) -> bool {
        !(self.update_markers || self.cleanup_english || self.fix_aly)
    }
}

/// Run the enabled passes on one sheet: markers, then English, then ALY.
pub fn process_sheet(sheet: &mut Sheet, options: &RunOptions) -> SheetReport {
    let span = info_span!("sheet", sheet = %sheet.name());
    let _guard = span.enter();
    let before = sheet.changed_count();
    let mut report = SheetReport::new(sheet.name());
    if options.update_markers {
        update_sheet(sheet, options.profile, &mut report);
    }
    if options.cleanup_english {
        report.english_fixes = cleanup_english_sheet(sheet);
    }
    if options.fix_aly {
        report.aly_fixes = fix_aly_sheet(sheet);
    }
    report.cells_changed = sheet.changed_count() - before;
    info!(
        awbc_rows = report.awbc_rows,
        srbc_rows = report.srbc_rows,
        cells_changed = report.cells_changed,
        "sheet processed"
    );
    report
}

/// Run the enabled passes over every sheet in order.
pub fn process_workbook(workbook: &mut Workbook, options: &RunOptions) -> RunReport {
    let sheets = workbook
        .sheets
        .iter_mut()
        .map(|sheet| process_sheet(sheet, options))
        .collect();
    let report = RunReport {
        profile: options.profile,
        sheets,
    };
    info!(
        profile = %options.profile,
        sheets = report.sheets.len(),
        flagged_rows = report.flagged_rows(),
        cells_changed = report.cells_changed(),
        "workbook processed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_only_update_markers() {
        let options = RunOptions::default();
        assert_eq!(options.profile, Profile::V2);
        assert!(options.update_markers);
        assert!(!options.cleanup_english && !options.fix_aly);
        assert!(!options.is_noop());
    }

    #[test]
    fn disabled_passes_leave_workbook_untouched() {
        let mut workbook = Workbook::new(vec![Sheet::from_rows(
            "S",
            vec![vec!["ALY# (abnormal cells)".into()]],
        )]);
        let options = RunOptions {
            update_markers: false,
            ..RunOptions::default()
        };
        assert!(options.is_noop());
        let report = process_workbook(&mut workbook, &options);
        assert_eq!(report.cells_changed(), 0);
        assert_eq!(workbook.changed_count(), 0);
    }
}
