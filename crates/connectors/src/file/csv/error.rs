use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened at all.
    #[error("couldn't open {path}: {source}")]
    Access {
        path: String,
        source: std::io::Error,
    },

    #[error("error reading CSV file {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{0} has no header line")]
    MissingHeader(String),

    #[error("invalid delimiter {0:?}: expected a single ASCII character")]
    InvalidDelimiter(char),
}

impl FileError {
    /// Path of the file the error refers to, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            FileError::Access { path, .. }
            | FileError::Csv { path, .. }
            | FileError::MissingHeader(path) => Some(path),
            FileError::InvalidDelimiter(_) => None,
        }
    }
}
