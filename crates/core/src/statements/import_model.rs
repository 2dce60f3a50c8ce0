use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Typed failure of a statement import.
///
/// An empty statement is an error, so callers can tell "nothing to import"
/// apart from a successful import of zero rows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImportError {
    #[error("Statement contains no data rows")]
    EmptyStatement,

    #[error("Statement is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Invalid row at line {line}: {reason}")]
    InvalidRow { line: u64, reason: String },

    #[error("Malformed statement: {0}")]
    Csv(String),
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::Csv(err.to_string())
    }
}

/// Outcome of a successful import.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    /// Data rows parsed from the statement.
    pub rows_read: usize,
    /// Rows inserted or updated in storage.
    pub rows_upserted: usize,
}
