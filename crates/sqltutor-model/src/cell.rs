use std::fmt;

use serde::{Deserialize, Serialize};

/// A single result-set value. SQL results surface exactly these four shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

/// Display renders the value as a learner would see it in a result grid:
/// `NULL` for null, the shortest round-trip form for numbers, text verbatim.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => f.write_str("NULL"),
            Cell::Boolean(value) => write!(f, "{value}"),
            Cell::Number(value) => write!(f, "{value}"),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Boolean(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_uses_plain_json_scalars() {
        let row = vec![
            Cell::Null,
            Cell::Number(5.0),
            Cell::Text("x".to_string()),
            Cell::Boolean(true),
        ];
        let json = serde_json::to_string(&row).expect("serialize row");
        assert_eq!(json, r#"[null,5.0,"x",true]"#);

        let round: Vec<Cell> = serde_json::from_str(&json).expect("deserialize row");
        assert_eq!(round, row);
    }

    #[test]
    fn display_matches_result_grid_rendering() {
        assert_eq!(Cell::Null.to_string(), "NULL");
        assert_eq!(Cell::Number(5.0).to_string(), "5");
        assert_eq!(Cell::Number(2.5).to_string(), "2.5");
        assert_eq!(Cell::Boolean(false).to_string(), "false");
        assert_eq!(Cell::Text("Ada".to_string()).to_string(), "Ada");
    }
}
