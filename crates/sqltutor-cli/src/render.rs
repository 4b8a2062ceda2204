//! Terminal rendering of results and verdicts.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use sqltutor_model::{TabularResult, Verdict};

/// Render one result as a bordered table.
pub fn print_result_table(result: &TabularResult) {
    let mut table = Table::new();
    table.set_header(result.columns.iter().map(|name| header_cell(name)));
    apply_table_style(&mut table);
    for row in &result.values {
        table.add_row(row.iter().map(value_cell));
    }
    println!("{table}");
}

/// Render the verdict: outcome line, feedback, structured details.
pub fn print_verdict(verdict: &Verdict) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Outcome"),
        header_cell("Expected rows"),
        header_cell("Actual rows"),
    ]);
    apply_table_style(&mut table);
    let (expected_rows, actual_rows) = match &verdict.details {
        Some(details) => (
            details.expected_rows.to_string(),
            details.actual_rows.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };
    table.add_row(vec![
        outcome_cell(verdict.matched),
        Cell::new(expected_rows),
        Cell::new(actual_rows),
    ]);
    println!("{table}");
    println!("{}", verdict.feedback);
    if let Some(details) = &verdict.details {
        if let Some(columns) = &details.column_mismatch {
            println!("Columns involved: {}", columns.join(", "));
        }
        if let Some(samples) = &details.sample_differences {
            for sample in samples {
                println!("- {sample}");
            }
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn outcome_cell(matched: bool) -> Cell {
    if matched {
        Cell::new("MATCH")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("MISMATCH")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn value_cell(cell: &sqltutor_model::Cell) -> Cell {
    match cell {
        sqltutor_model::Cell::Null => Cell::new("NULL").fg(Color::DarkGrey),
        other => Cell::new(other.to_string()),
    }
}
