//! Composition utilities for wiring `SQLite` repositories.
//!
//! Construction only; no domain logic lives here.

use sqlx::SqlitePool;
use std::sync::Arc;

use movies_core::Repos;

use crate::repositories::SqliteMovieRepository;

/// Factory for creating repository instances with `SQLite` backends.
pub struct DbFactory;

impl DbFactory {
    /// Build all `SQLite` repositories from a pool.
    ///
    /// Returns the `Repos` container from `movies-core` with trait-object
    /// wrapped repositories.
    pub fn build_repos(pool: SqlitePool) -> Repos {
        Repos::new(Self::movie_repository(pool))
    }

    /// Create a movie repository from a pool.
    pub fn movie_repository(pool: SqlitePool) -> Arc<SqliteMovieRepository> {
        Arc::new(SqliteMovieRepository::new(pool))
    }
}

/// Test database helper for integration tests.
///
/// Provides an in-memory `SQLite` database with the production schema.
#[cfg(any(test, feature = "test-utils"))]
pub struct TestDb {
    pool: SqlitePool,
}

#[cfg(any(test, feature = "test-utils"))]
impl TestDb {
    /// Create a new in-memory test database with full schema.
    pub async fn new() -> anyhow::Result<Self> {
        let pool = crate::setup::setup_test_database().await?;
        Ok(Self { pool })
    }

    /// Get the underlying pool.
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create a movie repository using this test database.
    pub fn movie_repository(&self) -> SqliteMovieRepository {
        SqliteMovieRepository::new(self.pool.clone())
    }

    /// Build the repository container on this test database.
    pub fn repos(&self) -> Repos {
        DbFactory::build_repos(self.pool.clone())
    }
}
