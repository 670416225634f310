use crate::records::row::Row;

/// Everything a row source produced for one input: the table the rows
/// belong to, the header and the data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordBatch {
    pub table: String,
    pub columns: Row,
    pub rows: Vec<Row>,
}

impl RecordBatch {
    pub fn new(table: &str, columns: Row, rows: Vec<Row>) -> Self {
        RecordBatch {
            table: table.to_string(),
            columns,
            rows,
        }
    }

    /// True when the source had a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
