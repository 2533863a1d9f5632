//! Command-line interface of the `movies` binary.
//!
//! Every flag can also be supplied through a `MOVIES_*` environment
//! variable.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use movies_db::IN_MEMORY_URL;

use crate::bootstrap::{DEFAULT_CSV_PATH, DEFAULT_PORT, ServerConfig};

/// Golden Raspberry Awards producer interval service.
#[derive(Debug, Parser)]
#[command(name = "movies", version, about)]
pub struct Cli {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "MOVIES_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// HTTP port.
    #[arg(short, long, env = "MOVIES_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Nominee list imported at startup.
    #[arg(long, env = "MOVIES_CSV_PATH", default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Column separator of the nominee list (single ASCII character).
    #[arg(long, env = "MOVIES_CSV_SEPARATOR", default_value_t = ';')]
    pub csv_separator: char,

    /// `SQLite` connection URL.
    #[arg(long, env = "MOVIES_DATABASE_URL", default_value = IN_MEMORY_URL)]
    pub database_url: String,

    /// Start with an empty database instead of importing the nominee list.
    #[arg(long)]
    pub no_import: bool,

    /// Comma-separated CORS origins; all origins are allowed when empty.
    #[arg(long, env = "MOVIES_ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

impl Cli {
    /// Validate the arguments and turn them into a server configuration.
    pub fn into_config(self) -> Result<ServerConfig> {
        if !self.csv_separator.is_ascii() {
            bail!(
                "CSV separator must be a single ASCII character, got {:?}",
                self.csv_separator
            );
        }
        let separator = u8::try_from(self.csv_separator)?;

        let mut config = ServerConfig::with_defaults()
            .with_bind(self.bind)
            .with_port(self.port)
            .with_database_url(self.database_url)
            .with_csv_path(self.csv_path)
            .with_csv_separator(separator);
        if self.no_import {
            config = config.without_import();
        }
        if !self.allowed_origins.is_empty() {
            config = config.with_allowed_origins(self.allowed_origins);
        }
        Ok(config)
    }
}
