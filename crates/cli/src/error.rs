use connectors::{error::SinkError, file::csv::error::FileError, sql::error::ConnectorError};
use query_builder::error::QueryBuildError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    File(#[from] FileError),

    #[error("Cannot build INSERT statement: {0}")]
    Build(#[from] QueryBuildError),

    #[error("{0}")]
    Sink(#[from] SinkError),

    #[error("Could not connect to the database: {0}")]
    Connector(#[from] ConnectorError),

    #[error("Configuration error: {0}")]
    Config(String),
}
