use thiserror::Error;

/// Reasons a set of rows cannot become a valid INSERT statement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryBuildError {
    #[error("header row has no columns")]
    NoColumns,

    #[error("no data rows to insert")]
    NoRows,

    /// `row` counts data rows from 1, the header excluded.
    #[error("data row {row} has {found} fields, header has {expected}")]
    ArityMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}
