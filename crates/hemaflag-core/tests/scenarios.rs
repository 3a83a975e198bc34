//! End-to-end pass scenarios over a sheet with the report column layout.

use hemaflag_core::{RunOptions, process_sheet, template};
use hemaflag_model::{CellValue, Marker, Profile, Sheet};

const HEADERS: [&str; 19] = [
    "样本号", "AWBC#", "AWBC提示", "AWBC依据", "SRBC#", "SRBC提示", "SRBC依据", "总结1", "总结2",
    "解读", "可能疾病1", "可能性1", "分析1", "可能疾病2", "可能性2", "分析2", "可能疾病3",
    "可能性3", "分析3",
];

const AWBC: u32 = 2;
const SRBC: u32 = 5;
const SUMMARY: u32 = 8;
const SHORT: u32 = 9;
const INTERPRETATION: u32 = 10;
const SLOT1: u32 = 11;

fn report_sheet(data: Vec<Vec<(u32, &str)>>) -> Sheet {
    let mut rows = vec![
        HEADERS.iter().map(|label| CellValue::from(*label)).collect(),
        vec![CellValue::text("单位")],
    ];
    for cells in data {
        let mut row = vec![CellValue::Empty; HEADERS.len()];
        for (column, value) in cells {
            row[column as usize - 1] = CellValue::from(value);
        }
        rows.push(row);
    }
    Sheet::from_rows("血常规", rows)
}

fn grid(sheet: &Sheet) -> Vec<Vec<CellValue>> {
    (1..=sheet.max_row())
        .map(|row| {
            (1..=sheet.max_column())
                .map(|column| sheet.cell(row, column).clone())
                .collect()
        })
        .collect()
}

fn v1() -> RunOptions {
    RunOptions {
        profile: Profile::V1,
        ..RunOptions::default()
    }
}

#[test]
fn awbc_row_with_empty_text_gets_full_template() {
    let mut sheet = report_sheet(vec![vec![(1, "S001"), (AWBC, "↑")]]);
    let report = process_sheet(&mut sheet, &v1());
    let tpl = template(Profile::V1, Marker::Awbc);

    assert_eq!(sheet.cell(3, AWBC + 1), &CellValue::text(tpl.prompt));
    assert_eq!(sheet.cell(3, AWBC + 2), &CellValue::text(tpl.basis));
    assert_eq!(sheet.cell(3, SUMMARY), &CellValue::text(tpl.prompt));
    assert_eq!(sheet.cell(3, SHORT), &CellValue::text(tpl.short));
    assert_eq!(sheet.cell(3, INTERPRETATION), &CellValue::text(tpl.interpretation));
    assert_eq!(
        sheet.cell(3, SLOT1),
        &CellValue::text("血液系统异常风险（需排除白血病/骨髓增生性疾病）")
    );
    assert_eq!(sheet.cell(3, SLOT1 + 1), &CellValue::text("中等"));
    assert_eq!(sheet.cell(3, SLOT1 + 2), &CellValue::text(tpl.disease.analysis));
    assert_eq!(sheet.cell(3, SLOT1 + 3), &CellValue::Empty);

    assert_eq!(report.awbc_rows, 1);
    assert_eq!(report.srbc_rows, 0);
    assert_eq!(report.prompts_filled, 2);
    assert_eq!(report.texts_fused, 3);
    assert_eq!(report.diseases.filled, 1);
    assert_eq!(report.cells_changed, 8);
}

#[test]
fn second_run_changes_nothing() {
    let mut sheet = report_sheet(vec![
        vec![(AWBC, "↑")],
        vec![(AWBC, "↑"), (SRBC, "↑"), (SUMMARY, "HGB偏低")],
        vec![
            (AWBC, "↑"),
            (SLOT1, "A"),
            (SLOT1 + 2, "a"),
            (SLOT1 + 3, "B"),
            (SLOT1 + 5, "b"),
            (SLOT1 + 6, "C"),
            (SLOT1 + 8, "c"),
        ],
    ]);
    process_sheet(&mut sheet, &v1());
    let once = grid(&sheet);
    let report = process_sheet(&mut sheet, &v1());
    assert_eq!(grid(&sheet), once);
    assert_eq!(report.prompts_filled, 0);
    assert_eq!(report.texts_fused, 0);
    assert_eq!(report.diseases.already_present, 4);
}

#[test]
fn both_markers_rank_srbc_first() {
    let mut sheet = report_sheet(vec![vec![
        (AWBC, "↑"),
        (SRBC, "↑"),
        (SUMMARY, "HGB偏低"),
        (SLOT1, "A"),
        (SLOT1 + 2, "a"),
        (SLOT1 + 3, "B"),
        (SLOT1 + 5, "b"),
        (SLOT1 + 6, "C"),
        (SLOT1 + 8, "c"),
    ]]);
    let report = process_sheet(&mut sheet, &v1());
    let awbc = template(Profile::V1, Marker::Awbc);
    let srbc = template(Profile::V1, Marker::Srbc);

    // SRBC runs second and leads the summary.
    let expected_summary = format!(
        "{}；{}；HGB偏低",
        srbc.prompt.trim_end_matches('。'),
        awbc.prompt.trim_end_matches('。')
    );
    assert_eq!(sheet.cell(3, SUMMARY), &CellValue::text(expected_summary));

    assert_eq!(sheet.cell(3, SLOT1), &CellValue::text(srbc.disease.name));
    assert_eq!(sheet.cell(3, SLOT1 + 3), &CellValue::text("A"));
    assert_eq!(sheet.cell(3, SLOT1 + 5), &CellValue::text("a"));
    assert_eq!(sheet.cell(3, SLOT1 + 6), &CellValue::text("B"));
    assert_eq!(
        sheet.cell(3, SLOT1 + 8),
        &CellValue::text(format!("b；c；{}", awbc.disease.analysis))
    );
    assert_eq!(report.diseases.merged, 1);
    assert_eq!(report.diseases.promoted, 1);
}

#[test]
fn other_status_values_are_ignored() {
    let mut sheet = report_sheet(vec![
        vec![(AWBC, "↓"), (SRBC, "正常")],
        vec![(AWBC, "")],
        vec![(SRBC, "↑ ")],
    ]);
    let report = process_sheet(&mut sheet, &RunOptions::default());
    assert_eq!(report.awbc_rows + report.srbc_rows, 0);
    assert_eq!(sheet.changed_count(), 0);
}

#[test]
fn numeric_summary_is_fused_as_text() {
    let mut sheet = report_sheet(vec![vec![(SRBC, "↑")]]);
    sheet.set(3, SHORT, CellValue::Number(2.0));
    let report = process_sheet(&mut sheet, &RunOptions::default());
    let srbc = template(Profile::V2, Marker::Srbc);
    assert_eq!(
        sheet.cell(3, SHORT),
        &CellValue::text(format!("{}；2", srbc.short))
    );
    assert_eq!(report.srbc_rows, 1);
}

#[test]
fn sheet_without_marker_headers_only_runs_cleanup() {
    let mut sheet = Sheet::from_rows(
        "说明",
        vec![
            vec!["备注".into()],
            vec![CellValue::Empty],
            vec!["ALY# (abnormal white blood cells)".into()],
        ],
    );
    let options = RunOptions {
        fix_aly: true,
        ..RunOptions::default()
    };
    let report = process_sheet(&mut sheet, &options);
    assert!(report.markers_resolved.is_empty());
    assert_eq!(report.aly_fixes, 1);
    assert_eq!(sheet.cell(3, 1), &CellValue::text("ALY# (atypical lymphocytes)"));
}
