use crate::{
    error::SinkError,
    sink::StatementSink,
    sql::{
        error::{ConnectorError, DbError},
        postgres::utils::connect_client,
    },
};
use async_trait::async_trait;
use tokio_postgres::{Client, Config};
use tracing::{debug, info};

/// Runs finished statements against a PostgreSQL database.
///
/// Statements carry their values inline, so they go through the simple
/// query protocol without parameters.
pub struct PgExecutor {
    client: Client,
}

impl PgExecutor {
    pub async fn connect(config: Config) -> Result<Self, ConnectorError> {
        let hosts = config.get_hosts().len();
        let client = connect_client(config).await?;
        info!(hosts, "Connected to PostgreSQL");
        Ok(PgExecutor { client })
    }

    pub async fn exec(&self, sql: &str) -> Result<(), tokio_postgres::Error> {
        self.client.batch_execute(sql).await
    }
}

#[async_trait]
impl StatementSink for PgExecutor {
    async fn send(&mut self, table: &str, statement: &str) -> Result<(), SinkError> {
        self.exec(statement)
            .await
            .map_err(|source| DbError::Execute {
                table: table.to_string(),
                source,
            })?;
        debug!(table, "Executed INSERT statement");
        Ok(())
    }
}
