//! Marker scan, text fusion, disease ranking and cleanup passes.

pub mod cleanup;
pub mod columns;
pub mod fusion;
pub mod pipeline;
pub mod ranker;
pub mod scanner;
pub mod templates;

pub use cleanup::{cleanup_english, cleanup_english_sheet, fix_aly_descriptions, fix_aly_sheet};
pub use columns::{MarkerColumns, SheetColumns};
pub use fusion::{cleanup, contains_any, prefix_interpretation, prefix_short, prefix_summary};
pub use pipeline::{RunOptions, process_sheet, process_workbook};
pub use ranker::{insert_disease, insert_disease_in_row};
pub use scanner::update_sheet;
pub use templates::{references, template};
