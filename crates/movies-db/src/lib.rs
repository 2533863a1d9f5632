#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::DbFactory;

// Re-export TestDb for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use factory::TestDb;

pub use repositories::SqliteMovieRepository;

// Re-export setup functions for convenient access
pub use setup::{IN_MEMORY_URL, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

#[cfg(test)]
use tokio_test as _;
