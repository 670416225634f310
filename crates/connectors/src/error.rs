use crate::sql::error::DbError;
use thiserror::Error;

/// Errors raised while handing a finished statement to its destination.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Writing to stdout or an output file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database-related error.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
