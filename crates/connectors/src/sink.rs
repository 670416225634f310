use crate::error::SinkError;
use async_trait::async_trait;
use std::{
    fs::File,
    io::{self, BufWriter, Stdout, Write},
    path::Path,
};
use tracing::debug;

/// Destination for finished INSERT statements.
#[async_trait]
pub trait StatementSink: Send {
    async fn send(&mut self, table: &str, statement: &str) -> Result<(), SinkError>;
}

/// Writes each statement on its own line.
pub struct PrintSink<W> {
    writer: W,
}

impl<W: Write> PrintSink<W> {
    pub fn new(writer: W) -> Self {
        PrintSink { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl PrintSink<Stdout> {
    pub fn stdout() -> Self {
        PrintSink::new(io::stdout())
    }
}

impl PrintSink<BufWriter<File>> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let file = File::create(path)?;
        Ok(PrintSink::new(BufWriter::new(file)))
    }
}

#[async_trait]
impl<W: Write + Send> StatementSink for PrintSink<W> {
    async fn send(&mut self, table: &str, statement: &str) -> Result<(), SinkError> {
        writeln!(self.writer, "{statement}")?;
        self.writer.flush()?;
        debug!(table, bytes = statement.len(), "Printed statement");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_print_sink_writes_one_line_per_statement() {
        let mut sink = PrintSink::new(Vec::new());

        sink.send("a", "INSERT INTO a (x) VALUES (1);").await.unwrap();
        sink.send("b", "INSERT INTO b (y) VALUES (E'z');").await.unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            out,
            "INSERT INTO a (x) VALUES (1);\nINSERT INTO b (y) VALUES (E'z');\n"
        );
    }

    #[tokio::test]
    async fn test_print_sink_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.sql");

        let mut sink = PrintSink::create(&path).unwrap();
        sink.send("t", "INSERT INTO t (id) VALUES (1);").await.unwrap();
        drop(sink);

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "INSERT INTO t (id) VALUES (1);\n");
    }

    #[tokio::test]
    async fn test_print_sink_behind_trait_object() {
        let mut sink: Box<dyn StatementSink> = Box::new(PrintSink::new(Vec::new()));
        assert!(sink.send("t", "SELECT 1;").await.is_ok());
    }
}
