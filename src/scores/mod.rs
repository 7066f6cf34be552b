pub mod classify;
pub mod whz;

use crate::io::sheet::Cell;

/// Per-record failure. None of these abort a run; the record's Z-score is
/// left undefined and the failure is reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WhzError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("column '{column}' missing from LMS table {table}")]
    Schema { table: String, column: &'static str },

    #[error("computation failed: {0}")]
    Computation(String),
}

impl WhzError {
    pub fn kind(&self) -> &'static str {
        match self {
            WhzError::InvalidInput(_) => "invalid_input",
            WhzError::Schema { .. } => "schema",
            WhzError::Computation(_) => "computation",
        }
    }
}

/// `Ok(None)` is an undefined score without an error (no reference row).
pub type WhzOutcome = Result<Option<f64>, WhzError>;

/// One input row as read from the sheet, before any parsing.
#[derive(Debug, Clone)]
pub struct ChildRecord {
    pub row: usize,
    pub id: String,
    pub sex: Cell,
    pub height: Cell,
    pub weight: Cell,
}

#[derive(Debug, Clone)]
pub struct RecordFailure {
    pub row: usize,
    pub id: String,
    pub kind: &'static str,
    pub message: String,
}
