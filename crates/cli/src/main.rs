use crate::{
    commands::Cli,
    conn::ConnectionSettings,
    env::EnvManager,
    error::CliError,
    runner::RunSummary,
};
use clap::Parser;
use connectors::{
    file::csv::settings::CsvSettings,
    sink::{PrintSink, StatementSink},
    sql::postgres::executor::PgExecutor,
};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod conn;
mod env;
mod error;
mod output;
mod runner;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(summary) if summary.is_success() => ExitCode::SUCCESS,
        Ok(summary) => {
            output::log(&format!(
                "[r]{} of {} files failed[/]",
                summary.failed,
                summary.total()
            ));
            ExitCode::FAILURE
        }
        Err(err) => {
            output::error("could not start", &err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<RunSummary, CliError> {
    let settings = CsvSettings::new(cli.delimiter)?;
    let mut sink = open_sink(&cli).await?;

    info!(files = cli.csv_files.len(), print = cli.print, "Starting");
    Ok(runner::run_files(&cli.csv_files, settings, sink.as_mut()).await)
}

/// Either a printer or a live database connection, opened once for all files.
async fn open_sink(cli: &Cli) -> Result<Box<dyn StatementSink>, CliError> {
    if cli.print {
        let sink: Box<dyn StatementSink> = match &cli.output {
            Some(path) => Box::new(PrintSink::create(path)?),
            None => Box::new(PrintSink::stdout()),
        };
        return Ok(sink);
    }

    let mut env = EnvManager::new();
    if let Some(path) = &cli.env_file {
        env.load_from_file(path)?;
    }

    let settings = ConnectionSettings::resolve(&cli.db, &env)?;
    output::info(&format!(
        "configured to send statements to [c]{}[/]",
        settings.describe()
    ));

    let executor = PgExecutor::connect(settings.to_config()?).await?;
    Ok(Box::new(executor))
}
