use serde::{Deserialize, Serialize};

/// Outcome of one comparison: pass/fail plus learner-facing feedback.
///
/// `feedback` is displayed verbatim to the learner; `matched` drives progress
/// state in the exercise-verification workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    #[serde(rename = "match")]
    pub matched: bool,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<VerdictDetails>,
}

/// Structured diagnostics attached to a verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictDetails {
    pub expected_rows: usize,
    pub actual_rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_mismatch: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_differences: Option<Vec<String>>,
}

impl Verdict {
    pub fn pass(feedback: impl Into<String>, details: Option<VerdictDetails>) -> Self {
        Self {
            matched: true,
            feedback: feedback.into(),
            details,
        }
    }

    pub fn fail(feedback: impl Into<String>, details: Option<VerdictDetails>) -> Self {
        Self {
            matched: false,
            feedback: feedback.into(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_match_under_its_wire_name() {
        let verdict = Verdict::fail(
            "Your result has too few rows.",
            Some(VerdictDetails {
                expected_rows: 3,
                actual_rows: 1,
                ..VerdictDetails::default()
            }),
        );
        let json = serde_json::to_value(&verdict).expect("serialize verdict");
        assert_eq!(json["match"], false);
        assert_eq!(json["details"]["expectedRows"], 3);
        assert_eq!(json["details"]["actualRows"], 1);
        assert!(json["details"].get("columnMismatch").is_none());
    }
}
