//! Database setup and initialization.
//!
//! This module provides the `setup_database()` function for opening the
//! `SQLite` database and creating the schema. Entry points call this with
//! the configured connection URL.

use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

/// Connection URL of the default, process-local database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Opens the `SQLite` database at `url` and ensures the schema exists.
///
/// In-memory databases live only as long as a connection to them, so for
/// those the pool holds exactly one connection that is never recycled.
/// File databases have their parent directory created on demand.
///
/// # Example
///
/// ```rust,no_run
/// use movies_db::setup_database;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = setup_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn setup_database(url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool_options = if is_in_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        // Ensure parent directory exists
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        SqlitePoolOptions::new()
            .max_connections(4)
            .acquire_timeout(Duration::from_secs(10))
    };

    let pool = pool_options.connect_with(options).await?;
    create_schema(&pool).await?;

    debug!(url, "Database ready");
    Ok(pool)
}

/// Sets up an in-memory `SQLite` database for testing.
///
/// Creates a fresh in-memory database with the full production schema.
#[cfg(any(test, feature = "test-utils"))]
pub async fn setup_test_database() -> Result<SqlitePool> {
    setup_database(IN_MEMORY_URL).await
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Creates the complete database schema.
///
/// Safe to call multiple times as all statements use IF NOT EXISTS.
pub(crate) async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movie (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            title TEXT NOT NULL,
            studios TEXT NOT NULL DEFAULT '',
            producers TEXT NOT NULL DEFAULT '',
            winner INTEGER NOT NULL DEFAULT 0 CHECK (winner IN (0, 1))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Award queries scan winners in year order
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_movie_winner_year ON movie(winner, year)")
        .execute(pool)
        .await?;

    Ok(())
}
