//! Versioned JSON archive of a verdict, written for the
//! exercise-verification workflow.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use sqltutor_model::Verdict;

const REPORT_SCHEMA: &str = "sqltutor.verdict-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct VerdictReportPayload<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub verdict: &'a Verdict,
}

/// Write `verdict_report.json` into `output_dir`, creating the directory if
/// needed, and return the written path.
pub fn write_verdict_report_json(output_dir: &Path, verdict: &Verdict) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join("verdict_report.json");
    let payload = VerdictReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        verdict,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lands_on_disk_with_schema_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let verdict = Verdict::pass("Correct! Your query returned the expected result.", None);
        let path = write_verdict_report_json(dir.path(), &verdict).expect("write report");
        let raw = std::fs::read_to_string(&path).expect("read report");
        let json: serde_json::Value = serde_json::from_str(&raw).expect("parse report");
        assert_eq!(json["schema"], "sqltutor.verdict-report");
        assert_eq!(json["schema_version"], 1);
        assert_eq!(json["verdict"]["match"], true);
    }
}
