use crate::{error::CliError, output};
use connectors::{
    file::csv::{adapter::CsvAdapter, settings::CsvSettings},
    sink::StatementSink,
};
use query_builder::{build_insert_statement, validate_rows};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Sent { table: String, rows: usize },
    /// Header present but no data rows; nothing was sent.
    Skipped { table: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub sent: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn total(&self) -> usize {
        self.sent + self.skipped + self.failed
    }
}

/// Reads one file, builds its INSERT statement and hands it to the sink.
pub async fn process_file(
    path: &Path,
    settings: CsvSettings,
    sink: &mut dyn StatementSink,
) -> Result<FileOutcome, CliError> {
    let batch = CsvAdapter::open(path, settings)?.read_all()?;
    if batch.is_empty() {
        return Ok(FileOutcome::Skipped { table: batch.table });
    }

    validate_rows(batch.columns.as_slice(), &batch.rows)?;
    let statement = build_insert_statement(&batch.table, batch.columns.as_slice(), &batch.rows);
    debug!(table = %batch.table, bytes = statement.len(), "Built INSERT statement");

    sink.send(&batch.table, &statement).await?;
    Ok(FileOutcome::Sent {
        rows: batch.row_count(),
        table: batch.table,
    })
}

/// Processes every file in order. A failing file is reported and the loop
/// moves on to the next one.
pub async fn run_files(
    files: &[PathBuf],
    settings: CsvSettings,
    sink: &mut dyn StatementSink,
) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in files {
        output::info(&format!("dealing with [c]{}[/]", path.display()));

        match process_file(path, settings, sink).await {
            Ok(FileOutcome::Sent { table, rows }) => {
                debug!(%table, rows, "File processed");
                output::done();
                summary.sent += 1;
            }
            Ok(FileOutcome::Skipped { table }) => {
                warn!(%table, "File has no data rows");
                output::warning(&format!(
                    "[c]{}[/] has no data rows, no statement for table [c]{table}[/]",
                    path.display()
                ));
                summary.skipped += 1;
            }
            Err(err) => {
                output::error(&format!("failed on [c]{}[/]", path.display()), &err);
                summary.failed += 1;
            }
        }
    }

    summary
}
