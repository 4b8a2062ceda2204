use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row {row} has {got} value(s), expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
