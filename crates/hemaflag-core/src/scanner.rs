//! Row scan that applies marker templates to flagged rows.

use hemaflag_model::{CellValue, MarkerTemplate, Profile, Sheet, SheetReport, UP_INDICATOR};
use tracing::{debug, trace};

use crate::columns::{MarkerColumns, SheetColumns};
use crate::fusion::{prefix_interpretation, prefix_short, prefix_summary};
use crate::ranker::insert_disease_in_row;
use crate::templates::template;

/// Scan every data row and apply the profile's templates where a marker is `↑`.
///
/// Markers are handled independently and in a fixed order, so a row may be
/// updated for both. Sheets without a marker's status header skip that marker.
pub fn update_sheet(sheet: &mut Sheet, profile: Profile, report: &mut SheetReport) {
    let columns = SheetColumns::resolve(sheet);
    report.markers_resolved = columns.markers.iter().map(|c| c.marker).collect();
    if columns.markers.is_empty() {
        debug!(sheet = sheet.name(), "no marker status columns");
        return;
    }
    let used_columns = sheet.max_column();
    for row in sheet.data_rows() {
        for marker_columns in &columns.markers {
            if !is_flagged(sheet.cell(row, marker_columns.status)) {
                continue;
            }
            let tpl = template(profile, marker_columns.marker);
            report.record_flag(tpl.marker);
            debug!(row, marker = %tpl.marker, "marker flagged");
            apply_template(sheet, row, used_columns, &columns, marker_columns, tpl, report);
        }
    }
}

fn is_flagged(status: &CellValue) -> bool {
    status.as_text() == Some(UP_INDICATOR)
}

fn apply_template(
    sheet: &mut Sheet,
    row: u32,
    used_columns: u32,
    columns: &SheetColumns,
    marker_columns: &MarkerColumns,
    tpl: &MarkerTemplate,
    report: &mut SheetReport,
) {
    for (column, text) in [
        (marker_columns.prompt(), tpl.prompt),
        (marker_columns.basis(), tpl.basis),
    ] {
        if column <= used_columns
            && sheet.cell(row, column).is_blank()
            && sheet.set(row, column, CellValue::text(text))
        {
            report.prompts_filled += 1;
        }
    }

    let keywords = tpl.keywords();
    let fusions: [(Option<u32>, &str, fn(&str, &str, &[&str]) -> String); 3] = [
        (columns.summary, tpl.prompt, prefix_summary),
        (columns.short, tpl.short, prefix_short),
        (columns.interpretation, tpl.interpretation, prefix_interpretation),
    ];
    for (column, prefix, fuse) in fusions {
        let Some(column) = column else {
            continue;
        };
        let current = sheet.cell(row, column).display_text().into_owned();
        let fused = fuse(&current, prefix, keywords);
        if sheet.set(row, column, CellValue::Text(fused)) {
            trace!(row, column, "free text fused");
            report.texts_fused += 1;
        }
    }

    if let Some(first_column) = columns.disease {
        let outcome = insert_disease_in_row(sheet, row, first_column, &tpl.disease);
        debug!(row, marker = %tpl.marker, ?outcome, "disease slots updated");
        report.diseases.record(outcome);
    }
}
