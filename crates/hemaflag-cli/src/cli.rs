//! CLI argument definitions for hemaflag.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hemaflag_model::Profile;

#[derive(Parser)]
#[command(
    name = "hemaflag",
    version,
    about = "Add AWBC/SRBC clinical prompts to lab report workbooks",
    long_about = "Add AWBC/SRBC clinical prompts to lab report workbooks.\n\n\
                  Rows whose AWBC# or SRBC# status is ↑ get prompt and basis text,\n\
                  fused summaries and interpretation, and a ranked possible-disease\n\
                  entry. Optional passes tidy English phrasing and ALY descriptions."
)]
pub struct Cli {
    /// Source workbook (.xlsx).
    #[arg(
        long,
        value_name = "PATH",
        required_unless_present = "list_references"
    )]
    pub input: Option<PathBuf>,

    /// Destination workbook (default: <INPUT-STEM>_补充提示<EXT> next to the input).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Prompt template profile (v1 plain wording, v2 with citations).
    #[arg(long, value_enum, default_value = "v2")]
    pub profile: ProfileArg,

    /// Normalize known English phrasing (ALY#, hematology wording, antimetabolite, e.g.).
    #[arg(long = "cleanup-english")]
    pub cleanup_english: bool,

    /// Rewrite ALY descriptions paired with granulocyte or generic cell labels.
    #[arg(long = "fix-aly")]
    pub fix_aly: bool,

    /// Skip AWBC/SRBC prompt updates; useful for cleanup-only runs.
    #[arg(long = "skip-awbc-srbc")]
    pub skip_awbc_srbc: bool,

    /// Transform and report without writing the output workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write the per-sheet change report as JSON.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Print the literature references cited by the selected profile and exit.
    #[arg(long = "list-references")]
    pub list_references: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Include cell contents in trace logs (patient data; off by default).
    #[arg(long = "log-data")]
    pub log_data: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProfileArg {
    V1,
    V2,
}

impl From<ProfileArg> for Profile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::V1 => Profile::V1,
            ProfileArg::V2 => Profile::V2,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
