use serde::{Deserialize, Serialize};

/// Relaxations applied when comparing an expected and an actual result.
///
/// Every flag is independent. The JSON form is camelCase with all fields
/// optional, so a partial options record from the exercise definition
/// deserializes onto the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompareOptions {
    /// Columns must correspond positionally, not just as a set.
    pub require_equal_column_order: bool,
    /// Column correspondence is established by name; otherwise by content
    /// signature and column identity is irrelevant.
    pub require_equal_column_names: bool,
    /// Rows are compared as a multiset rather than an ordered sequence.
    pub ignore_row_order: bool,
    /// Text values and column names compare without case folding.
    pub case_sensitive: bool,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            require_equal_column_order: false,
            require_equal_column_names: false,
            ignore_row_order: true,
            case_sensitive: false,
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_equal_column_order(mut self, enable: bool) -> Self {
        self.require_equal_column_order = enable;
        self
    }

    #[must_use]
    pub fn with_equal_column_names(mut self, enable: bool) -> Self {
        self.require_equal_column_names = enable;
        self
    }

    #[must_use]
    pub fn with_ignore_row_order(mut self, enable: bool) -> Self {
        self.ignore_row_order = enable;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, enable: bool) -> Self {
        self.case_sensitive = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_lands_on_defaults() {
        let options: CompareOptions =
            serde_json::from_str(r#"{"ignoreRowOrder":false}"#).expect("parse options");
        assert!(!options.ignore_row_order);
        assert!(!options.require_equal_column_order);
        assert!(!options.require_equal_column_names);
        assert!(!options.case_sensitive);

        let defaults: CompareOptions = serde_json::from_str("{}").expect("parse empty options");
        assert_eq!(defaults, CompareOptions::default());
        assert!(defaults.ignore_row_order);
    }
}
