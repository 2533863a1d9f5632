//! Movie repository trait definition.
//!
//! This port defines the interface for nominee persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{Movie, NewMovie};

/// Repository for nominated movies.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Award interval logic belongs in `MovieService`, not here
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a single movie, returning it with its assigned ID.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError>;

    /// Insert a batch of movies atomically.
    ///
    /// Returns the number of rows written. Either all rows are stored or none.
    async fn insert_all(&self, movies: &[NewMovie]) -> Result<usize, RepositoryError>;

    /// Replace the whole table with `movies` atomically.
    ///
    /// Existing rows are deleted in the same transaction, so a reload never
    /// duplicates nominees. Returns the number of rows written.
    async fn replace_all(&self, movies: &[NewMovie]) -> Result<usize, RepositoryError>;

    /// List every movie ordered by ID (import order).
    async fn list(&self) -> Result<Vec<Movie>, RepositoryError>;

    /// List winning movies ordered by year, ties broken by ID.
    async fn list_winners(&self) -> Result<Vec<Movie>, RepositoryError>;

    /// Count stored movies.
    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Remove every movie, returning how many rows were deleted.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
