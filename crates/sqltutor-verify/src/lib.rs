//! Query-result equivalence and feedback engine.
//!
//! Given a reference ("expected") result and a learner-submitted ("actual")
//! result, decide whether they are equivalent under the relaxations in
//! [`CompareOptions`] and, when they are not, produce one deterministic
//! learner-facing diagnosis of the first and most fundamental difference.
//!
//! The engine is pure: no I/O, no shared state, inputs are never mutated,
//! and concurrent callers need no coordination. Running time is
//! O(rows x columns) string work with constant-size caps on diagnostics.

mod columns;
mod feedback;
mod normalize;
mod report;
mod rows;

pub use columns::ColumnMapping;
pub use normalize::{NULL_TOKEN, normalize_column_name, normalize_value};
pub use report::{VerdictReportPayload, write_verdict_report_json};

use sqltutor_model::{CompareOptions, TabularResult, Verdict};

/// Compare an expected and an actual query result.
///
/// Either side may be absent (the upstream SQL produced no result set).
/// Both absent is a trivial success; exactly one absent is an immediate
/// failure. Otherwise the stages run in fixed priority order, each able to
/// short-circuit with a terminal verdict: column count, column
/// identity/content, row count, row values. Only full success falls through
/// to the congratulatory verdict.
pub fn compare_results(
    expected: Option<&TabularResult>,
    actual: Option<&TabularResult>,
    options: &CompareOptions,
) -> Verdict {
    match (expected, actual) {
        (None, None) => feedback::trivially_matched(),
        (None, Some(_)) | (Some(_), None) => feedback::missing_result(),
        (Some(expected), Some(actual)) => match run_stages(expected, actual, options) {
            Ok(()) => feedback::matched(expected, actual),
            Err(mismatch) => feedback::mismatched(expected, actual, mismatch),
        },
    }
}

fn run_stages(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<(), feedback::Mismatch> {
    let mapping = columns::match_columns(expected, actual, options)?;
    rows::compare_rows(expected, actual, &mapping, options)
}
