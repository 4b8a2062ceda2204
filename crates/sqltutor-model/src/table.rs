use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{ModelError, Result};

/// A materialized query result: ordered column names plus equal-width rows.
///
/// Column order is significant and duplicate names are permitted (a learner
/// can `SELECT a, a FROM t`); what a comparison makes of duplicates is up to
/// the matching strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabularResult {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Cell>>,
}

impl TabularResult {
    /// Build a result, enforcing that every row is exactly as wide as the
    /// column list.
    pub fn new(columns: Vec<String>, values: Vec<Vec<Cell>>) -> Result<Self> {
        let result = Self { columns, values };
        result.check_widths()?;
        Ok(result)
    }

    /// Re-check the row-width invariant, e.g. after deserializing.
    pub fn check_widths(&self) -> Result<()> {
        let expected = self.columns.len();
        for (row, cells) in self.values.iter().enumerate() {
            if cells.len() != expected {
                return Err(ModelError::RowWidth {
                    row,
                    expected,
                    got: cells.len(),
                });
            }
        }
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Cell> {
        self.values.iter().filter_map(move |row| row.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_rows() {
        let error = TabularResult::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Cell::from(1), Cell::from("x")],
                vec![Cell::from(2)],
            ],
        )
        .expect_err("ragged row must be rejected");
        assert!(matches!(
            error,
            ModelError::RowWidth {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn column_values_walks_one_column() {
        let result = TabularResult::new(
            vec!["a".to_string(), "b".to_string()],
            vec![
                vec![Cell::from(1), Cell::from("x")],
                vec![Cell::from(2), Cell::from("y")],
            ],
        )
        .expect("well-formed result");
        let column: Vec<String> = result.column_values(1).map(Cell::to_string).collect();
        assert_eq!(column, vec!["x", "y"]);
    }
}
