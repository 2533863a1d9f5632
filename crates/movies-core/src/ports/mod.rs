//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod movie_repository;

use std::sync::Arc;
use thiserror::Error;

pub use movie_repository::MovieRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;

/// Container for all repository trait objects.
///
/// Lives in `movies-core` so services can be wired without depending on
/// `movies-db`.
#[derive(Clone)]
pub struct Repos {
    /// Movie repository for nominee persistence.
    pub movies: Arc<dyn MovieRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// A constraint was violated (e.g., NOT NULL, check constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes,
/// process exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The CSV source could not be read.
    #[error("Import error: {0}")]
    Import(String),
}
