use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, anyhow, bail};
use hemaflag_core::{RunOptions, process_workbook};
use hemaflag_model::{RunReport, Workbook};
use hemaflag_xlsx::XlsxDocument;
use tracing::{info, info_span, trace, warn};

use crate::cli::Cli;
use crate::logging::redact_value;
use crate::paths::{expand_home, resolve_output_path};

#[derive(Debug)]
pub struct RunOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: RunReport,
    /// Cells pushed into the saved workbook; `None` on a dry run.
    pub cells_written: Option<usize>,
    pub report_path: Option<PathBuf>,
}

pub fn run_options(cli: &Cli) -> RunOptions {
    RunOptions {
        profile: cli.profile.into(),
        update_markers: !cli.skip_awbc_srbc,
        cleanup_english: cli.cleanup_english,
        fix_aly: cli.fix_aly,
    }
}

pub fn run(cli: &Cli) -> Result<RunOutcome> {
    let input = cli
        .input
        .as_deref()
        .map(expand_home)
        .ok_or_else(|| anyhow!("--input is required"))?;
    if !input.exists() {
        bail!("input file not found: {}", input.display());
    }
    let output = resolve_output_path(&input, cli.output.as_deref());
    let options = run_options(cli);
    let run_span = info_span!("run", input = %input.display(), profile = %options.profile);
    let _run_guard = run_span.enter();
    if options.is_noop() {
        warn!("all passes disabled; the workbook will be saved unchanged");
    }

    let start = Instant::now();
    let mut document = XlsxDocument::open(&input)
        .with_context(|| format!("load workbook {}", input.display()))?;
    let report = process_workbook(document.workbook_mut(), &options);
    trace_changes(document.workbook());
    info!(
        flagged_rows = report.flagged_rows(),
        cells_changed = report.cells_changed(),
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );

    let report_path = match &cli.report {
        Some(path) => {
            let path = expand_home(path);
            write_report(&path, &report)?;
            Some(path)
        }
        None => None,
    };

    let cells_written = if cli.dry_run {
        info!("dry run; output not written");
        None
    } else {
        let written = document
            .save(&output)
            .with_context(|| format!("save workbook {}", output.display()))?;
        Some(written)
    };

    Ok(RunOutcome {
        input,
        output,
        report,
        cells_written,
        report_path,
    })
}

fn trace_changes(workbook: &Workbook) {
    for sheet in &workbook.sheets {
        for (row, column, value) in sheet.changed_cells() {
            trace!(
                sheet = sheet.name(),
                row,
                column,
                value = redact_value(&value.display_text()),
                "cell changed"
            );
        }
    }
}

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize run report")?;
    fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}
