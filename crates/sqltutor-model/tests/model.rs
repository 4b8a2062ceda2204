use sqltutor_model::{Cell, CompareOptions, TabularResult, Verdict, VerdictDetails};

#[test]
fn tabular_result_round_trips_through_json() {
    let result = TabularResult::new(
        vec!["id".to_string(), "name".to_string()],
        vec![
            vec![Cell::from(1), Cell::from("Ada")],
            vec![Cell::from(2), Cell::Null],
        ],
    )
    .expect("well-formed result");

    let json = serde_json::to_string(&result).expect("serialize result");
    let round: TabularResult = serde_json::from_str(&json).expect("deserialize result");
    round.check_widths().expect("invariant survives the wire");
    assert_eq!(round, result);
}

#[test]
fn verdict_round_trips_with_details() {
    let verdict = Verdict::pass(
        "Correct! Your query returned the expected result.",
        Some(VerdictDetails {
            expected_rows: 2,
            actual_rows: 2,
            column_mismatch: None,
            sample_differences: None,
        }),
    );
    let json = serde_json::to_string(&verdict).expect("serialize verdict");
    let round: Verdict = serde_json::from_str(&json).expect("deserialize verdict");
    assert_eq!(round, verdict);
}

#[test]
fn options_builder_mirrors_flags() {
    let options = CompareOptions::new()
        .with_equal_column_names(true)
        .with_ignore_row_order(false);
    assert!(options.require_equal_column_names);
    assert!(!options.ignore_row_order);
    assert!(!options.require_equal_column_order);
    assert!(!options.case_sensitive);
}
