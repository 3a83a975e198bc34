use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hemaflag_core::references;
use hemaflag_model::{Profile, SheetReport};

use crate::commands::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    println!("Input: {}", outcome.input.display());
    println!("Profile: {}", outcome.report.profile);
    if let Some(path) = &outcome.report_path {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("AWBC↑"),
        header_cell("SRBC↑"),
        header_cell("Prompts"),
        header_cell("Fused"),
        header_cell("Promoted"),
        header_cell("Filled"),
        header_cell("Merged"),
        header_cell("Present"),
        header_cell("English"),
        header_cell("ALY"),
        header_cell("Cells"),
    ]);
    apply_table_style(&mut table);
    for index in 1..12 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total = SheetReport::new("TOTAL");
    for sheet in &outcome.report.sheets {
        table.add_row(sheet_row(sheet, sheet_cell(sheet)));
        accumulate(&mut total, sheet);
    }
    let total_label = Cell::new("TOTAL")
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold);
    table.add_row(
        sheet_row(&total, total_label)
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold)),
    );
    println!("{table}");
    match outcome.cells_written {
        Some(_) => println!("Saved: {}", outcome.output.display()),
        None => println!(
            "Dry run: output not written (would save to {})",
            outcome.output.display()
        ),
    }
}

pub fn print_references(profile: Profile) {
    let cited = references(profile);
    if cited.is_empty() {
        println!("Profile {profile} cites no references.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Marker"),
        header_cell("Reference"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for reference in cited {
        table.add_row(vec![
            Cell::new(format!("[{}]", reference.number)),
            Cell::new(reference.marker).fg(Color::Blue),
            Cell::new(reference.citation),
        ]);
    }
    println!("{table}");
}

fn sheet_row(sheet: &SheetReport, label: Cell) -> Vec<Cell> {
    vec![
        label,
        count_cell(sheet.awbc_rows, Color::Yellow),
        count_cell(sheet.srbc_rows, Color::Yellow),
        count_cell(sheet.prompts_filled, Color::Green),
        count_cell(sheet.texts_fused, Color::Green),
        count_cell(sheet.diseases.promoted, Color::Magenta),
        count_cell(sheet.diseases.filled, Color::Green),
        count_cell(sheet.diseases.merged, Color::Magenta),
        count_cell(sheet.diseases.already_present, Color::DarkGrey),
        count_cell(sheet.english_fixes, Color::Green),
        count_cell(sheet.aly_fixes, Color::Green),
        count_cell(sheet.cells_changed, Color::Cyan),
    ]
}

fn accumulate(total: &mut SheetReport, sheet: &SheetReport) {
    total.awbc_rows += sheet.awbc_rows;
    total.srbc_rows += sheet.srbc_rows;
    total.prompts_filled += sheet.prompts_filled;
    total.texts_fused += sheet.texts_fused;
    total.diseases.promoted += sheet.diseases.promoted;
    total.diseases.filled += sheet.diseases.filled;
    total.diseases.merged += sheet.diseases.merged;
    total.diseases.already_present += sheet.diseases.already_present;
    total.english_fixes += sheet.english_fixes;
    total.aly_fixes += sheet.aly_fixes;
    total.cells_changed += sheet.cells_changed;
}

fn sheet_cell(sheet: &SheetReport) -> Cell {
    if sheet.markers_resolved.is_empty() {
        Cell::new(&sheet.sheet).fg(Color::DarkGrey)
    } else {
        Cell::new(&sheet.sheet)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
