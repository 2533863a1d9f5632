//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. All concrete implementations are instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use movies_core::{DEFAULT_SEPARATOR, MovieService, Repos};
use movies_db::{DbFactory, IN_MEMORY_URL, setup_database};
use tracing::{error, info};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the nominee list, relative to the working directory.
pub const DEFAULT_CSV_PATH: &str = "data/movielist.csv";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// `SQLite` connection URL.
    pub database_url: String,
    /// Nominee list imported at startup; `None` skips the import.
    pub csv_path: Option<PathBuf>,
    /// Column separator of the nominee list.
    pub csv_separator: u8,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            database_url: IN_MEMORY_URL.to_string(),
            csv_path: Some(PathBuf::from(DEFAULT_CSV_PATH)),
            csv_separator: DEFAULT_SEPARATOR,
            cors: CorsConfig::default(),
        }
    }

    /// Set the listener address.
    #[must_use]
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the HTTP port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the nominee list to import at startup.
    #[must_use]
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = Some(path.into());
        self
    }

    /// Start with an empty database.
    #[must_use]
    pub fn without_import(mut self) -> Self {
        self.csv_path = None;
        self
    }

    /// Set the nominee list column separator.
    #[must_use]
    pub const fn with_csv_separator(mut self, separator: u8) -> Self {
        self.csv_separator = separator;
        self
    }

    /// Set the `SQLite` connection URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Listener address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services needed by the handlers.
pub struct AxumContext {
    /// Nominee import and award queries.
    pub movies: Arc<MovieService>,
}

impl AxumContext {
    /// Build the context from a repository container.
    pub fn new(repos: Repos) -> Self {
        Self {
            movies: Arc::new(MovieService::new(repos.movies)),
        }
    }
}

/// Bootstrap the server: open the database and import the nominee list.
///
/// A nominee list that cannot be read is logged and the server starts
/// with an empty table; only database failures abort startup.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    info!(
        target: "movies.config",
        database_url = %config.database_url,
        csv_path = ?config.csv_path,
        csv_separator = %char::from(config.csv_separator),
        "Axum bootstrap configuration"
    );

    let pool = setup_database(&config.database_url).await?;
    let ctx = AxumContext::new(DbFactory::build_repos(pool));

    if let Some(path) = &config.csv_path {
        match ctx.movies.import_csv(path, config.csv_separator).await {
            Ok(summary) => info!(
                path = %path.display(),
                imported = summary.imported,
                skipped = summary.skipped,
                "Nominee list loaded"
            ),
            Err(e) => error!(path = %path.display(), error = %e, "Nominee list import failed"),
        }
    }

    Ok(ctx)
}

/// Start the web server with the given configuration.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("movies web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
