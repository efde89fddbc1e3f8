use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("column {column}: {actual} values for a table of {expected} rows")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TableError>;
