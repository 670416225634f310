use crate::file::csv::{error::FileError, metadata::table_name, settings::CsvSettings};
use model::records::{batch::RecordBatch, row::Row};
use std::{
    fs::File,
    path::{Path, PathBuf},
};
use tracing::debug;

/// Reads one delimited file: a header line followed by data lines.
///
/// The reader is flexible about row width. Rows shorter or longer than the
/// header are handed through unchanged so the caller decides what to do.
pub struct CsvAdapter {
    path: PathBuf,
    reader: csv::Reader<File>,
    headers: Row,
}

impl CsvAdapter {
    pub fn open<P: AsRef<Path>>(path: P, settings: CsvSettings) -> Result<Self, FileError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| FileError::Access {
            path: path.display().to_string(),
            source,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(settings.delimiter_byte())
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Row = reader
            .headers()
            .map_err(|source| FileError::Csv {
                path: path.display().to_string(),
                source,
            })?
            .iter()
            .collect();

        if headers.is_empty() {
            return Err(FileError::MissingHeader(path.display().to_string()));
        }

        debug!(
            path = %path.display(),
            delimiter = %settings.delimiter(),
            columns = headers.len(),
            "Opened CSV file"
        );

        Ok(CsvAdapter {
            path,
            reader,
            headers,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn headers(&self) -> &Row {
        &self.headers
    }

    /// Consumes the remaining data lines into a batch named after the file.
    pub fn read_all(mut self) -> Result<RecordBatch, FileError> {
        let mut rows = Vec::new();
        for record in self.reader.records() {
            let record = record.map_err(|source| FileError::Csv {
                path: self.path.display().to_string(),
                source,
            })?;
            rows.push(record.iter().collect::<Row>());
        }

        let table = table_name(&self.path);
        debug!(path = %self.path.display(), table = %table, rows = rows.len(), "Read CSV rows");

        Ok(RecordBatch::new(&table, self.headers, rows))
    }
}
