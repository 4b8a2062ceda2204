//! Canonical string forms for cells and column names.
//!
//! Every comparison in the engine happens in string space: cells and names
//! are folded into comparison-stable strings first, then compared byte for
//! byte. Normalization is total and locale-independent.

use sqltutor_model::Cell;

/// Token a null cell normalizes to.
pub const NULL_TOKEN: &str = "NULL";

/// Canonical comparison form of one cell.
///
/// Numbers go through `f64` display, so integral floats render without a
/// fractional part (`5.0` and `5` are the same value and both become `"5"`).
/// Text is case-folded unless the comparison is case sensitive; booleans and
/// the null token are already caseless.
pub fn normalize_value(cell: &Cell, case_sensitive: bool) -> String {
    match cell {
        Cell::Null => NULL_TOKEN.to_string(),
        Cell::Number(value) => value.to_string(),
        Cell::Boolean(value) => value.to_string(),
        Cell::Text(value) => {
            if case_sensitive {
                value.clone()
            } else {
                value.to_lowercase()
            }
        }
    }
}

/// Canonical comparison form of a column name.
pub fn normalize_column_name(name: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        name.to_string()
    } else {
        name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_uses_the_fixed_token() {
        assert_eq!(normalize_value(&Cell::Null, false), "NULL");
        assert_eq!(normalize_value(&Cell::Null, true), "NULL");
    }

    #[test]
    fn integral_floats_render_without_fraction() {
        assert_eq!(normalize_value(&Cell::Number(5.0), false), "5");
        assert_eq!(normalize_value(&Cell::Number(-3.0), false), "-3");
        assert_eq!(normalize_value(&Cell::Number(2.5), false), "2.5");
    }

    #[test]
    fn text_folds_case_unless_sensitive() {
        let cell = Cell::Text("Ada Lovelace".to_string());
        assert_eq!(normalize_value(&cell, false), "ada lovelace");
        assert_eq!(normalize_value(&cell, true), "Ada Lovelace");
    }

    #[test]
    fn booleans_are_caseless_already() {
        assert_eq!(normalize_value(&Cell::Boolean(true), true), "true");
        assert_eq!(normalize_value(&Cell::Boolean(false), false), "false");
    }

    #[test]
    fn column_names_fold_the_same_way() {
        assert_eq!(normalize_column_name("UserName", false), "username");
        assert_eq!(normalize_column_name("UserName", true), "UserName");
    }
}
