use crate::{commands::DbArgs, env::EnvManager, error::CliError};
use std::str::FromStr;
use tokio_postgres::{Config, config::SslMode};

const ENV_HOST: &str = "PGHOST";
const ENV_PORT: &str = "PGPORT";
const ENV_USER: &str = "PGUSER";
const ENV_PASSWORD: &str = "PGPASSWORD";
const ENV_DATABASE: &str = "PGDATABASE";
const ENV_SSL_MODE: &str = "PGSSLMODE";
/// Last resort for the user name, like libpq does.
const ENV_OS_USER: &str = "USER";

/// `sslmode` values accepted from the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    Disable,
    Prefer,
    Require,
}

impl FromStr for TlsMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" => Ok(TlsMode::Disable),
            "prefer" => Ok(TlsMode::Prefer),
            "require" => Ok(TlsMode::Require),
            other => Err(format!("Unknown sslmode: {other}")),
        }
    }
}

impl From<TlsMode> for SslMode {
    fn from(mode: TlsMode) -> Self {
        match mode {
            TlsMode::Disable => SslMode::Disable,
            TlsMode::Prefer => SslMode::Prefer,
            TlsMode::Require => SslMode::Require,
        }
    }
}

/// Database connection settings: command-line flags first, then the
/// standard `PG*` environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub db_name: Option<String>,
    pub tls: Option<TlsMode>,
}

impl ConnectionSettings {
    pub fn resolve(args: &DbArgs, env: &EnvManager) -> Result<Self, CliError> {
        let from_env = |key: &str| env.get(key).map(str::to_string);

        let port = match args.port {
            Some(port) => Some(port),
            None => env
                .get(ENV_PORT)
                .map(|raw| {
                    raw.parse::<u16>().map_err(|_| {
                        CliError::Config(format!("{ENV_PORT} is not a valid port: {raw}"))
                    })
                })
                .transpose()?,
        };

        let tls = env
            .get(ENV_SSL_MODE)
            .map(|raw| TlsMode::from_str(raw).map_err(CliError::Config))
            .transpose()?;

        Ok(ConnectionSettings {
            host: args.host.clone().or_else(|| from_env(ENV_HOST)),
            port,
            user: args
                .user
                .clone()
                .or_else(|| from_env(ENV_USER))
                .or_else(|| from_env(ENV_OS_USER)),
            password: args.password.clone().or_else(|| from_env(ENV_PASSWORD)),
            db_name: args.db_name.clone().or_else(|| from_env(ENV_DATABASE)),
            tls,
        })
    }

    pub fn to_config(&self) -> Result<Config, CliError> {
        let host = self.host.as_deref().ok_or_else(|| {
            CliError::Config(format!(
                "no database host given; pass --host or set {ENV_HOST}"
            ))
        })?;
        let user = self.user.as_deref().ok_or_else(|| {
            CliError::Config(format!(
                "no database user given; pass --user or set {ENV_USER}"
            ))
        })?;

        let mut config = Config::new();
        config.host(host);
        config.user(user);
        if let Some(port) = self.port {
            config.port(port);
        }
        if let Some(password) = self.password.as_deref() {
            config.password(password);
        }
        if let Some(db_name) = self.db_name.as_deref() {
            config.dbname(db_name);
        }
        if let Some(tls) = self.tls {
            config.ssl_mode(tls.into());
        }
        Ok(config)
    }

    /// `user@host:port/db` for status messages. Never shows the password.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        if let Some(user) = &self.user {
            out.push_str(user);
            out.push('@');
        }
        out.push_str(self.host.as_deref().unwrap_or("?"));
        if let Some(port) = self.port {
            out.push_str(&format!(":{port}"));
        }
        if let Some(db_name) = &self.db_name {
            out.push('/');
            out.push_str(db_name);
        }
        out
    }
}
