//! Integration tests for a full CLI run over xlsx files.

use std::path::{Path, PathBuf};

use clap::Parser;
use hemaflag_cli::cli::Cli;
use hemaflag_cli::commands::run;
use hemaflag_model::{CellValue, RunReport};
use hemaflag_xlsx::XlsxDocument;

const HEADERS: [&str; 19] = [
    "样本号", "AWBC#", "AWBC提示", "AWBC依据", "SRBC#", "SRBC提示", "SRBC依据", "总结1", "总结2",
    "解读", "可能疾病1", "可能性1", "分析1", "可能疾病2", "可能性2", "分析2", "可能疾病3",
    "可能性3", "分析3",
];

fn build_report(dir: &Path) -> PathBuf {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_mut(&0).unwrap();
    for (index, label) in HEADERS.iter().enumerate() {
        sheet
            .get_cell_mut((index as u32 + 1, 1))
            .set_value_string(*label);
    }
    sheet.get_cell_mut((1, 2)).set_value_string("单位");
    sheet.get_cell_mut((1, 3)).set_value_string("S001");
    sheet.get_cell_mut((2, 3)).set_value_string("↑");
    sheet.get_cell_mut((1, 4)).set_value_string("S002");
    sheet.get_cell_mut((5, 4)).set_value_string("↑");
    sheet
        .get_cell_mut((10, 4))
        .set_value_string("ALY# (abnormal white blood cells) 轻度升高");
    let path = dir.join("血常规.xlsx");
    umya_spreadsheet::writer::xlsx::write(&book, &path).unwrap();
    path
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("hemaflag").chain(args.iter().copied())).unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn default_output_lands_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = build_report(dir.path());
    let outcome = run(&parse(&["--input", path_arg(&input), "--profile", "v1"])).unwrap();

    assert_eq!(outcome.output, dir.path().join("血常规_补充提示.xlsx"));
    assert!(outcome.output.exists());
    assert_eq!(outcome.report.flagged_rows(), 2);

    let saved = XlsxDocument::open(&outcome.output).unwrap();
    let sheet = &saved.workbook().sheets[0];
    assert_eq!(
        sheet.cell(3, 11),
        &CellValue::text("血液系统异常风险（需排除白血病/骨髓增生性疾病）")
    );
    assert_eq!(sheet.cell(4, 11), &CellValue::text("镰刀型细胞贫血/携带者状态"));
    assert_eq!(sheet.cell(4, 12), &CellValue::text("较高"));
}

#[test]
fn rerun_on_output_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = build_report(dir.path());
    let first = run(&parse(&["--input", path_arg(&input)])).unwrap();
    let second_output = dir.path().join("second.xlsx");
    let second = run(&parse(&[
        "--input",
        path_arg(&first.output),
        "--output",
        path_arg(&second_output),
    ]))
    .unwrap();
    assert_eq!(second.report.cells_changed(), 0);
    assert_eq!(second.cells_written, Some(0));
}

#[test]
fn cleanup_only_run_skips_markers() {
    let dir = tempfile::tempdir().unwrap();
    let input = build_report(dir.path());
    let output = dir.path().join("clean.xlsx");
    let outcome = run(&parse(&[
        "--input",
        path_arg(&input),
        "--output",
        path_arg(&output),
        "--skip-awbc-srbc",
        "--fix-aly",
    ]))
    .unwrap();
    assert_eq!(outcome.report.flagged_rows(), 0);
    assert_eq!(outcome.cells_written, Some(1));

    let saved = XlsxDocument::open(&output).unwrap();
    let sheet = &saved.workbook().sheets[0];
    assert_eq!(
        sheet.cell(4, 10),
        &CellValue::text("ALY# (atypical lymphocytes) 轻度升高")
    );
    assert_eq!(sheet.cell(3, 11), &CellValue::Empty);
}

#[test]
fn dry_run_writes_report_but_no_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let input = build_report(dir.path());
    let report_path = dir.path().join("report.json");
    let outcome = run(&parse(&[
        "--input",
        path_arg(&input),
        "--dry-run",
        "--report",
        path_arg(&report_path),
    ]))
    .unwrap();
    assert_eq!(outcome.cells_written, None);
    assert!(!outcome.output.exists());

    let json = std::fs::read_to_string(&report_path).unwrap();
    let report: RunReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, outcome.report);
    assert_eq!(report.sheets[0].srbc_rows, 1);
}

#[test]
fn missing_input_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.xlsx");
    let error = run(&parse(&["--input", path_arg(&missing)])).unwrap_err();
    assert_eq!(
        error.to_string(),
        format!("input file not found: {}", missing.display())
    );
}
