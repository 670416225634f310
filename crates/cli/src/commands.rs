use clap::{Args, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv2sql",
    version,
    about = "Reads .csv files and inserts their rows into tables named after the files",
    long_about = "Reads each .csv file and builds one INSERT statement filling the table \
                  with the same name as the file. The statement is sent to a PostgreSQL \
                  database, or printed with --print."
)]
pub struct Cli {
    /// Files to turn into INSERT statements.
    #[arg(required = true)]
    pub csv_files: Vec<PathBuf>,

    #[command(flatten)]
    pub db: DbArgs,

    /// Print the statements instead of connecting to a database.
    #[arg(long)]
    pub print: bool,

    /// With --print, write the statements to this file instead of stdout.
    #[arg(short, long, requires = "print")]
    pub output: Option<PathBuf>,

    /// Field delimiter of the input files.
    #[arg(short = 'D', long, default_value_t = ',')]
    pub delimiter: char,

    /// Extra KEY=VALUE file merged over the environment (PGHOST, PGUSER, ...).
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Log diagnostics at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct DbArgs {
    /// Hostname of the database server.
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port of the database server.
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// User to connect as.
    #[arg(short = 'u', long)]
    pub user: Option<String>,

    /// Password of the database user.
    #[arg(short = 'P', long)]
    pub password: Option<String>,

    /// Database to insert into.
    #[arg(short = 'd', long = "db-name")]
    pub db_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_print_mode() {
        let cli = Cli::try_parse_from(["csv2sql", "--print", "a.csv", "b.csv"]).unwrap();

        assert!(cli.print);
        assert_eq!(cli.csv_files, vec![PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
        assert_eq!(cli.delimiter, ',');
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_parse_connection_flags() {
        let cli = Cli::try_parse_from([
            "csv2sql", "-H", "db.local", "-p", "5433", "-u", "loader", "-P", "secret", "-d",
            "shop", "people.csv",
        ])
        .unwrap();

        assert!(!cli.print);
        assert_eq!(cli.db.host.as_deref(), Some("db.local"));
        assert_eq!(cli.db.port, Some(5433));
        assert_eq!(cli.db.user.as_deref(), Some("loader"));
        assert_eq!(cli.db.password.as_deref(), Some("secret"));
        assert_eq!(cli.db.db_name.as_deref(), Some("shop"));
    }

    #[test]
    fn test_parse_delimiter() {
        let cli = Cli::try_parse_from(["csv2sql", "--print", "-D", ";", "x.csv"]).unwrap();
        assert_eq!(cli.delimiter, ';');
    }

    #[test]
    fn test_files_are_required() {
        assert!(Cli::try_parse_from(["csv2sql", "--print"]).is_err());
    }

    #[test]
    fn test_output_requires_print() {
        assert!(Cli::try_parse_from(["csv2sql", "-o", "out.sql", "x.csv"]).is_err());
        assert!(Cli::try_parse_from(["csv2sql", "--print", "-o", "out.sql", "x.csv"]).is_ok());
    }

    #[test]
    fn test_invalid_port() {
        assert!(Cli::try_parse_from(["csv2sql", "-p", "not-a-port", "x.csv"]).is_err());
    }
}
