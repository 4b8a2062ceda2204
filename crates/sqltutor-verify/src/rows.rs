//! Row comparator: multiset or sequence equality over canonicalized rows.

use sqltutor_model::{Cell, CompareOptions, TabularResult};

use crate::columns::{ColumnMapping, SIGNATURE_SEPARATOR};
use crate::feedback::{Mismatch, RowSample, render_row};
use crate::normalize::normalize_value;

/// Compare rows under an established column mapping.
///
/// The row-count gate runs before any row inspection. When row order is
/// ignored both signature lists are sorted first; two sorted lists are equal
/// exactly when the original multisets were, though a single differing row
/// can shift the apparent position of every later difference, so sample
/// indices are then illustrative rather than exact table positions.
pub(crate) fn compare_rows(
    expected: &TabularResult,
    actual: &TabularResult,
    mapping: &ColumnMapping,
    options: &CompareOptions,
) -> Result<(), Mismatch> {
    if expected.row_count() != actual.row_count() {
        return Err(if actual.row_count() > expected.row_count() {
            Mismatch::TooManyRows
        } else {
            Mismatch::TooFewRows
        });
    }

    // Expected cells are reordered through the mapping into the actual
    // column order; actual rows already are in that order.
    let inverse = invert(mapping);
    let mut expected_rows: Vec<(String, String)> = expected
        .values
        .iter()
        .map(|row| signed_row(inverse.iter().map(|&index| &row[index]), options))
        .collect();
    let mut actual_rows: Vec<(String, String)> = actual
        .values
        .iter()
        .map(|row| signed_row(row.iter(), options))
        .collect();

    if options.ignore_row_order {
        // Tuple sort: ordered by signature, ties broken by the rendered
        // form, so equal-signature rows land deterministically and the
        // sampled diagnostics do not depend on input row order.
        expected_rows.sort();
        actual_rows.sort();
    }

    let mut samples = Vec::new();
    for (index, (expected_row, actual_row)) in
        expected_rows.iter().zip(actual_rows.iter()).enumerate()
    {
        if expected_row.0 != actual_row.0 {
            samples.push(RowSample {
                index,
                expected: expected_row.1.clone(),
                actual: actual_row.1.clone(),
            });
            if samples.len() == crate::feedback::MAX_SAMPLE_DIFFERENCES {
                break;
            }
        }
    }

    if samples.is_empty() {
        Ok(())
    } else {
        Err(Mismatch::RowValues { samples })
    }
}

/// Signature plus rendered display form of one row, in agreed column order.
fn signed_row<'a>(
    cells: impl Iterator<Item = &'a Cell> + Clone,
    options: &CompareOptions,
) -> (String, String) {
    let signature = cells
        .clone()
        .map(|cell| normalize_value(cell, options.case_sensitive))
        .collect::<Vec<String>>()
        .join(SIGNATURE_SEPARATOR);
    (signature, render_row(cells))
}

/// Invert a total injective mapping: `inverse[mapping[i]] == i`.
fn invert(mapping: &ColumnMapping) -> Vec<usize> {
    let mut inverse = vec![0; mapping.len()];
    for (expected_index, &actual_index) in mapping.iter().enumerate() {
        inverse[actual_index] = expected_index;
    }
    inverse
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str], values: Vec<Vec<Cell>>) -> TabularResult {
        TabularResult::new(columns.iter().map(|c| (*c).to_string()).collect(), values)
            .expect("well-formed result")
    }

    fn identity(count: usize) -> ColumnMapping {
        (0..count).collect()
    }

    #[test]
    fn row_count_gate_runs_first() {
        let expected = table(&["a"], vec![vec![Cell::from(1)], vec![Cell::from(2)]]);
        let actual = table(&["a"], vec![vec![Cell::from(9)]]);
        assert_eq!(
            compare_rows(&expected, &actual, &identity(1), &CompareOptions::default()),
            Err(Mismatch::TooFewRows)
        );
        assert_eq!(
            compare_rows(&actual, &expected, &identity(1), &CompareOptions::default()),
            Err(Mismatch::TooManyRows)
        );
    }

    #[test]
    fn permuted_rows_match_as_a_multiset() {
        let expected = table(&["a"], vec![vec![Cell::from(1)], vec![Cell::from(2)]]);
        let actual = table(&["a"], vec![vec![Cell::from(2)], vec![Cell::from(1)]]);
        assert_eq!(
            compare_rows(&expected, &actual, &identity(1), &CompareOptions::default()),
            Ok(())
        );
    }

    #[test]
    fn permuted_rows_fail_as_a_sequence() {
        let expected = table(&["a"], vec![vec![Cell::from(1)], vec![Cell::from(2)]]);
        let actual = table(&["a"], vec![vec![Cell::from(2)], vec![Cell::from(1)]]);
        let options = CompareOptions::new().with_ignore_row_order(false);
        let error = compare_rows(&expected, &actual, &identity(1), &options)
            .expect_err("sequence comparison must fail");
        let Mismatch::RowValues { samples } = error else {
            panic!("expected a row-value mismatch");
        };
        assert_eq!(samples[0].index, 0);
        assert_eq!(samples[0].expected, "(1)");
        assert_eq!(samples[0].actual, "(2)");
    }

    #[test]
    fn mapping_reorders_expected_cells() {
        // Expected columns (a, b); actual has them as (b, a). Mapping a->1,
        // b->0, so expected rows re-render in the actual order.
        let expected = table(
            &["a", "b"],
            vec![vec![Cell::from(1), Cell::from("x")]],
        );
        let actual = table(
            &["b", "a"],
            vec![vec![Cell::from("x"), Cell::from(1)]],
        );
        assert_eq!(
            compare_rows(&expected, &actual, &vec![1, 0], &CompareOptions::default()),
            Ok(())
        );
    }

    #[test]
    fn sample_collection_stops_at_the_cap() {
        let expected = table(
            &["a"],
            (0..10).map(|i| vec![Cell::from(i)]).collect(),
        );
        let actual = table(
            &["a"],
            (100..110).map(|i| vec![Cell::from(i)]).collect(),
        );
        let options = CompareOptions::new().with_ignore_row_order(false);
        let error = compare_rows(&expected, &actual, &identity(1), &options)
            .expect_err("all rows differ");
        let Mismatch::RowValues { samples } = error else {
            panic!("expected a row-value mismatch");
        };
        assert_eq!(samples.len(), 3);
    }
}
