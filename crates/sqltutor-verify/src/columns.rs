//! Column matcher: establishes the correspondence between expected and
//! actual columns.
//!
//! Two strategies exist. By-name matching reconciles declared column names
//! (ordered or as a set); by-content matching ignores names entirely and
//! pairs columns whose value signatures are identical. In both cases the
//! column-count gate runs first and wins over every later check.

use std::collections::{BTreeSet, HashMap, VecDeque};

use sqltutor_model::{CompareOptions, TabularResult};

use crate::feedback::Mismatch;
use crate::normalize::{normalize_column_name, normalize_value};

/// Joins the parts of a column or row signature. U+001F (unit separator)
/// keeps adjacent values from gluing into a false match.
pub(crate) const SIGNATURE_SEPARATOR: &str = "\u{1f}";

/// Correspondence from expected column index to actual column index.
///
/// Always total and injective: the matcher fails instead of returning a
/// partial mapping, so every entry is a valid, unique actual index.
pub type ColumnMapping = Vec<usize>;

/// Match columns, returning either a complete mapping or the first
/// discrepancy.
pub(crate) fn match_columns(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<ColumnMapping, Mismatch> {
    if expected.column_count() != actual.column_count() {
        return Err(if actual.column_count() > expected.column_count() {
            Mismatch::TooManyColumns
        } else {
            Mismatch::TooFewColumns
        });
    }
    if options.require_equal_column_names {
        if options.require_equal_column_order {
            match_names_ordered(expected, actual, options)
        } else {
            match_names_unordered(expected, actual, options)
        }
    } else if options.require_equal_column_order {
        match_content_ordered(expected, actual, options)
    } else {
        match_content_unordered(expected, actual, options)
    }
}

/// Names must agree position by position; the mapping is the identity.
fn match_names_ordered(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<ColumnMapping, Mismatch> {
    for (position, (expected_name, actual_name)) in expected
        .columns
        .iter()
        .zip(actual.columns.iter())
        .enumerate()
    {
        let expected_norm = normalize_column_name(expected_name, options.case_sensitive);
        let actual_norm = normalize_column_name(actual_name, options.case_sensitive);
        if expected_norm != actual_norm {
            return Err(Mismatch::ColumnOrder {
                position: position + 1,
                expected: expected_name.clone(),
                actual: actual_name.clone(),
            });
        }
    }
    Ok((0..expected.column_count()).collect())
}

/// Names must agree as sets; each expected name claims the first unused
/// actual column carrying it.
fn match_names_unordered(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<ColumnMapping, Mismatch> {
    let expected_norms: Vec<String> = expected
        .columns
        .iter()
        .map(|name| normalize_column_name(name, options.case_sensitive))
        .collect();
    let actual_norms: Vec<String> = actual
        .columns
        .iter()
        .map(|name| normalize_column_name(name, options.case_sensitive))
        .collect();
    let expected_set: BTreeSet<&str> = expected_norms.iter().map(String::as_str).collect();
    let actual_set: BTreeSet<&str> = actual_norms.iter().map(String::as_str).collect();

    // Symmetric difference, reported with the original (unfolded) names.
    let missing = set_difference(&expected_norms, &expected.columns, &actual_set);
    let extra = set_difference(&actual_norms, &actual.columns, &expected_set);

    if missing.len() == 1 && extra.len() == 1 {
        let mut missing = missing;
        let mut extra = extra;
        return Err(Mismatch::ColumnNameSwap {
            missing: missing.remove(0),
            extra: extra.remove(0),
        });
    }
    if !missing.is_empty() {
        return Err(Mismatch::MissingColumns { missing });
    }
    if !extra.is_empty() {
        return Err(Mismatch::UnexpectedColumns);
    }

    // Equal name sets. Duplicate counts can still disagree, in which case
    // some expected duplicate finds every carrier of its name already
    // claimed; that fails rather than producing a partial mapping.
    let mut index = NameIndex::new(&actual_norms);
    let mut mapping = Vec::with_capacity(expected_norms.len());
    for norm in &expected_norms {
        match index.claim(norm) {
            Some(actual_index) => mapping.push(actual_index),
            None => return Err(Mismatch::UnexpectedColumns),
        }
    }
    Ok(mapping)
}

/// Column value signatures must agree position by position.
fn match_content_ordered(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<ColumnMapping, Mismatch> {
    for position in 0..expected.column_count() {
        let expected_signature = column_signature(expected, position, options);
        let actual_signature = column_signature(actual, position, options);
        if expected_signature != actual_signature {
            return Err(Mismatch::ColumnDataAt {
                position: position + 1,
                name: actual.columns[position].clone(),
            });
        }
    }
    Ok((0..expected.column_count()).collect())
}

/// Greedy by-content assignment: each expected column claims the first
/// unused actual column with an identical signature, scanning left to right.
///
/// Deliberately not a maximum bipartite matching; when two expected columns
/// share a signature the leftmost actual carrier goes to the first claimant,
/// which preserves the engine's historical behavior.
fn match_content_unordered(
    expected: &TabularResult,
    actual: &TabularResult,
    options: &CompareOptions,
) -> Result<ColumnMapping, Mismatch> {
    let count = expected.column_count();
    let actual_signatures: Vec<String> = (0..count)
        .map(|position| column_signature(actual, position, options))
        .collect();
    let mut used = vec![false; count];
    let mut mapping = Vec::with_capacity(count);
    for position in 0..count {
        let signature = column_signature(expected, position, options);
        let claimed =
            (0..count).find(|&candidate| !used[candidate] && actual_signatures[candidate] == signature);
        match claimed {
            Some(candidate) => {
                used[candidate] = true;
                mapping.push(candidate);
            }
            None => {
                let unmatched: Vec<String> = (0..count)
                    .filter(|&candidate| !used[candidate])
                    .map(|candidate| actual.columns[candidate].clone())
                    .filter(|name| !name.trim().is_empty())
                    .collect();
                return Err(Mismatch::ColumnData { unmatched });
            }
        }
    }
    Ok(mapping)
}

/// Canonical representation of one column's values.
///
/// Always order-independent: correspondence is about which data lives in a
/// column, while row ordering is enforced separately by the row comparator.
/// Were the signature order-sensitive, a permuted-row submission under
/// strict row order would surface as a column-content failure instead of the
/// row diagnosis the learner needs.
fn column_signature(table: &TabularResult, index: usize, options: &CompareOptions) -> String {
    let mut parts: Vec<String> = table
        .column_values(index)
        .map(|cell| normalize_value(cell, options.case_sensitive))
        .collect();
    parts.sort();
    parts.join(SIGNATURE_SEPARATOR)
}

/// Unique normalized names from `norms` absent from `other`, reported via
/// the parallel original-name list.
fn set_difference(norms: &[String], originals: &[String], other: &BTreeSet<&str>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut difference = Vec::new();
    for (norm, original) in norms.iter().zip(originals.iter()) {
        if !other.contains(norm.as_str()) && seen.insert(norm.as_str()) {
            difference.push(original.clone());
        }
    }
    difference
}

/// Normalized column name -> queue of actual indices still unclaimed.
///
/// Reshaped case-insensitive lookup: claiming pops the leftmost carrier so
/// duplicate names pair up in declaration order.
struct NameIndex {
    slots: HashMap<String, VecDeque<usize>>,
}

impl NameIndex {
    fn new(norms: &[String]) -> Self {
        let mut slots: HashMap<String, VecDeque<usize>> = HashMap::new();
        for (index, norm) in norms.iter().enumerate() {
            slots.entry(norm.clone()).or_default().push_back(index);
        }
        Self { slots }
    }

    fn claim(&mut self, norm: &str) -> Option<usize> {
        self.slots.get_mut(norm).and_then(VecDeque::pop_front)
    }
}
