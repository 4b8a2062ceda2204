//! Diagnostic reporter: converts stage outcomes into learner-facing verdicts.
//!
//! The comparison stages communicate through the closed [`Mismatch`] enum;
//! this module owns every message template, so the engine has exactly one
//! feedback vocabulary. All list rendering is capped, which bounds verdict
//! size regardless of table size.

use sqltutor_model::{Cell, TabularResult, Verdict, VerdictDetails};

/// Most column names listed in one message before eliding the rest.
pub(crate) const MAX_LISTED_COLUMNS: usize = 6;
/// Most example rows rendered into feedback text.
pub(crate) const MAX_FEEDBACK_ROWS: usize = 2;
/// Most entries carried in `sampleDifferences`.
pub(crate) const MAX_SAMPLE_DIFFERENCES: usize = 3;

/// First discrepancy found by the column or row stage.
///
/// Variants are ordered by the waterfall priority: column count, column
/// identity/content, row count, row values. Each is terminal.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Mismatch {
    TooManyColumns,
    TooFewColumns,
    /// Exactly one expected name absent and one actual name unexpected.
    ColumnNameSwap { missing: String, extra: String },
    MissingColumns { missing: Vec<String> },
    /// Nothing missing, but duplicates left an unexpected actual column.
    UnexpectedColumns,
    ColumnOrder {
        position: usize,
        expected: String,
        actual: String,
    },
    /// Content matching found no counterpart for some expected column.
    ColumnData { unmatched: Vec<String> },
    /// Content matching under required column order failed at a position.
    ColumnDataAt { position: usize, name: String },
    TooManyRows,
    TooFewRows,
    RowValues { samples: Vec<RowSample> },
}

/// One differing row pair, already rendered for display.
///
/// `index` is the exact row position when row order is enforced; after a
/// multiset sort it is the position within the sorted signature lists and
/// only illustrative.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RowSample {
    pub index: usize,
    pub expected: String,
    pub actual: String,
}

/// Success verdict for two present, equivalent results.
pub(crate) fn matched(expected: &TabularResult, actual: &TabularResult) -> Verdict {
    Verdict::pass(
        "Correct! Your query returned the expected result.",
        Some(details(expected, actual)),
    )
}

/// Trivial success: nothing was expected and nothing was returned.
pub(crate) fn trivially_matched() -> Verdict {
    Verdict::pass("No result set was expected and none was returned.", None)
}

/// Exactly one of the two results is absent.
pub(crate) fn missing_result() -> Verdict {
    Verdict::fail("Your query did not return a result set.", None)
}

/// Render the first discrepancy as a terminal failure verdict.
pub(crate) fn mismatched(
    expected: &TabularResult,
    actual: &TabularResult,
    mismatch: Mismatch,
) -> Verdict {
    let mut details = details(expected, actual);
    let feedback = match mismatch {
        Mismatch::TooManyColumns | Mismatch::UnexpectedColumns => {
            "Your result has too many columns.".to_string()
        }
        Mismatch::TooFewColumns => "Your result has too few columns.".to_string(),
        Mismatch::ColumnNameSwap { missing, extra } => {
            let feedback =
                format!("Your result is missing column '{missing}'. Did you mean '{extra}'?");
            details.column_mismatch = Some(vec![missing, extra]);
            feedback
        }
        Mismatch::MissingColumns { missing } => {
            let feedback = format!(
                "Your result is missing column(s): {}.",
                summarize_names(&missing)
            );
            details.column_mismatch = Some(truncate_names(missing));
            feedback
        }
        Mismatch::ColumnOrder {
            position,
            expected,
            actual,
        } => {
            let feedback = format!(
                "Your columns are not in the required order: column {position} should be '{expected}' but is '{actual}'."
            );
            details.column_mismatch = Some(vec![expected, actual]);
            feedback
        }
        Mismatch::ColumnData { unmatched } => {
            if unmatched.is_empty() {
                "The data in your columns does not match the expected result.".to_string()
            } else {
                let feedback = format!(
                    "The data in your columns does not match the expected result. Check column(s): {}.",
                    summarize_names(&unmatched)
                );
                details.column_mismatch = Some(truncate_names(unmatched));
                feedback
            }
        }
        Mismatch::ColumnDataAt { position, name } => {
            let feedback = format!(
                "The data in column {position} ('{name}') does not match the expected result."
            );
            details.column_mismatch = Some(vec![name]);
            feedback
        }
        Mismatch::TooManyRows => "Your result has too many rows.".to_string(),
        Mismatch::TooFewRows => "Your result has too few rows.".to_string(),
        Mismatch::RowValues { samples } => {
            let examples: Vec<&str> = samples
                .iter()
                .take(MAX_FEEDBACK_ROWS)
                .map(|sample| sample.expected.as_str())
                .collect();
            let feedback = if examples.is_empty() {
                "Some rows do not match the expected result.".to_string()
            } else {
                format!(
                    "Some rows do not match the expected result. Expected rows include: {}.",
                    examples.join(", ")
                )
            };
            details.sample_differences = Some(
                samples
                    .into_iter()
                    .take(MAX_SAMPLE_DIFFERENCES)
                    .map(|sample| {
                        format!(
                            "row {}: expected {} but found {}",
                            sample.index + 1,
                            sample.expected,
                            sample.actual
                        )
                    })
                    .collect(),
            );
            feedback
        }
    };
    Verdict::fail(feedback, Some(details))
}

/// Render one row the way a learner sees it: `(v1, v2, ...)`.
pub(crate) fn render_row<'a>(cells: impl Iterator<Item = &'a Cell>) -> String {
    let rendered: Vec<String> = cells.map(Cell::to_string).collect();
    format!("({})", rendered.join(", "))
}

fn details(expected: &TabularResult, actual: &TabularResult) -> VerdictDetails {
    VerdictDetails {
        expected_rows: expected.row_count(),
        actual_rows: actual.row_count(),
        column_mismatch: None,
        sample_differences: None,
    }
}

/// Comma-join names, eliding everything past the cap.
fn summarize_names(names: &[String]) -> String {
    let shown: Vec<&str> = names
        .iter()
        .take(MAX_LISTED_COLUMNS)
        .map(String::as_str)
        .collect();
    let mut summary = shown.join(", ");
    if names.len() > MAX_LISTED_COLUMNS {
        summary.push_str(&format!(" (and {} more)", names.len() - MAX_LISTED_COLUMNS));
    }
    summary
}

fn truncate_names(mut names: Vec<String>) -> Vec<String> {
    names.truncate(MAX_LISTED_COLUMNS);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqltutor_model::Cell;

    fn empty(columns: &[&str]) -> TabularResult {
        TabularResult::new(columns.iter().map(|c| (*c).to_string()).collect(), vec![])
            .expect("well-formed result")
    }

    #[test]
    fn name_list_is_capped_with_a_suffix() {
        let missing: Vec<String> = (1..=9).map(|i| format!("col{i}")).collect();
        let verdict = mismatched(
            &empty(&["a"]),
            &empty(&["b"]),
            Mismatch::MissingColumns { missing },
        );
        assert_eq!(
            verdict.feedback,
            "Your result is missing column(s): col1, col2, col3, col4, col5, col6 (and 3 more)."
        );
        let listed = verdict
            .details
            .and_then(|details| details.column_mismatch)
            .expect("column mismatch details");
        assert_eq!(listed.len(), MAX_LISTED_COLUMNS);
    }

    #[test]
    fn swap_produces_a_did_you_mean() {
        let verdict = mismatched(
            &empty(&["a", "b"]),
            &empty(&["a", "c"]),
            Mismatch::ColumnNameSwap {
                missing: "b".to_string(),
                extra: "c".to_string(),
            },
        );
        assert!(!verdict.matched);
        assert_eq!(
            verdict.feedback,
            "Your result is missing column 'b'. Did you mean 'c'?"
        );
    }

    #[test]
    fn row_samples_render_into_feedback_and_details() {
        let samples = vec![
            RowSample {
                index: 0,
                expected: "(1, x)".to_string(),
                actual: "(1, z)".to_string(),
            },
            RowSample {
                index: 1,
                expected: "(2, y)".to_string(),
                actual: "(2, w)".to_string(),
            },
            RowSample {
                index: 2,
                expected: "(3, q)".to_string(),
                actual: "(3, r)".to_string(),
            },
        ];
        let verdict = mismatched(&empty(&["a"]), &empty(&["a"]), Mismatch::RowValues { samples });
        assert_eq!(
            verdict.feedback,
            "Some rows do not match the expected result. Expected rows include: (1, x), (2, y)."
        );
        let differences = verdict
            .details
            .and_then(|details| details.sample_differences)
            .expect("sample differences");
        assert_eq!(differences.len(), 3);
        assert_eq!(differences[0], "row 1: expected (1, x) but found (1, z)");
    }

    #[test]
    fn render_row_wraps_values_in_parens() {
        let row = vec![Cell::from(1), Cell::from("x"), Cell::Null];
        assert_eq!(render_row(row.iter()), "(1, x, NULL)");
    }
}
