use anyhow::Result;
use tracing::{debug, info, info_span};

use sqltutor_model::CompareOptions;
use sqltutor_verify::{compare_results, write_verdict_report_json};

use sqltutor_cli::loader::load_result;
use sqltutor_cli::render::{print_result_table, print_verdict};

use crate::cli::{CompareArgs, ShowArgs};

/// Run the comparison; returns whether the results matched.
pub fn run_compare(args: &CompareArgs) -> Result<bool> {
    let span = info_span!("compare");
    let _guard = span.enter();

    let expected = load_result(&args.expected)?;
    info!(
        rows = expected.row_count(),
        columns = expected.column_count(),
        path = %args.expected.display(),
        "loaded expected result"
    );
    let actual = load_result(&args.actual)?;
    info!(
        rows = actual.row_count(),
        columns = actual.column_count(),
        path = %args.actual.display(),
        "loaded actual result"
    );

    let options = CompareOptions::new()
        .with_ignore_row_order(!args.ordered_rows)
        .with_equal_column_order(args.ordered_columns)
        .with_equal_column_names(args.match_names)
        .with_case_sensitive(args.case_sensitive);
    debug!(?options, "resolved comparison options");

    let verdict = compare_results(Some(&expected), Some(&actual), &options);
    info!(matched = verdict.matched, "comparison finished");

    if let Some(report_dir) = &args.report_dir {
        let path = write_verdict_report_json(report_dir, &verdict)?;
        info!(path = %path.display(), "wrote verdict report");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("Expected:");
        print_result_table(&expected);
        println!("Actual:");
        print_result_table(&actual);
        print_verdict(&verdict);
    }
    Ok(verdict.matched)
}

/// Render a single result file.
pub fn run_show(args: &ShowArgs) -> Result<()> {
    let result = load_result(&args.result)?;
    info!(
        rows = result.row_count(),
        columns = result.column_count(),
        path = %args.result.display(),
        "loaded result"
    );
    print_result_table(&result);
    Ok(())
}
