//! Load materialized query results from disk.
//!
//! Two formats: CSV (first record is the header, cell types inferred) and
//! JSON (the `TabularResult` wire shape). Either way the row-width invariant
//! is enforced before the result reaches the engine.

use std::path::Path;

use anyhow::{Context, Result, bail};
use csv::ReaderBuilder;

use sqltutor_model::{Cell, TabularResult};

/// Load a result file, dispatching on the extension.
pub fn load_result(path: &Path) -> Result<TabularResult> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => read_csv_result(path),
        Some("json") => read_json_result(path),
        _ => bail!("unsupported result format: {}", path.display()),
    }
}

fn read_csv_result(path: &Path) -> Result<TabularResult> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_field).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(TabularResult {
            columns: Vec::new(),
            values: Vec::new(),
        });
    }
    let columns = raw_rows[0].clone();
    let mut values = Vec::with_capacity(raw_rows.len() - 1);
    for record in raw_rows.iter().skip(1) {
        let mut row = Vec::with_capacity(columns.len());
        for index in 0..columns.len() {
            let field = record.get(index).map(String::as_str).unwrap_or("");
            row.push(infer_cell(field));
        }
        values.push(row);
    }
    Ok(TabularResult::new(columns, values)?)
}

fn read_json_result(path: &Path) -> Result<TabularResult> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read json: {}", path.display()))?;
    let result: TabularResult =
        serde_json::from_str(&raw).with_context(|| format!("parse json: {}", path.display()))?;
    result.check_widths()?;
    Ok(result)
}

/// Trim whitespace and a UTF-8 BOM from one CSV field.
fn normalize_field(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Type a CSV field: empty means NULL, then boolean, then number, then text.
fn infer_cell(field: &str) -> Cell {
    if field.is_empty() {
        return Cell::Null;
    }
    if field.eq_ignore_ascii_case("true") {
        return Cell::Boolean(true);
    }
    if field.eq_ignore_ascii_case("false") {
        return Cell::Boolean(false);
    }
    if let Ok(number) = field.parse::<f64>() {
        return Cell::Number(number);
    }
    Cell::Text(field.to_string())
}
