use thiserror::Error;

/// Errors happening during connection setup.
#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),

    #[error("PostgreSQL connection failed: {0}")]
    Postgres(#[from] tokio_postgres::Error),
}

/// Errors coming back from statement execution.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("insert into {table} failed: {source}")]
    Execute {
        table: String,
        source: tokio_postgres::Error,
    },
}
