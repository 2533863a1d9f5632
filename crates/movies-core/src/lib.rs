#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod import;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AwardIntervals, Movie, NewMovie, ProducerInterval};
pub use import::{DEFAULT_SEPARATOR, ImportReport, parse_movies};
pub use ports::{CoreError, MovieRepository, Repos, RepositoryError};
pub use services::{ImportSummary, MovieService, compute_award_intervals};

// Dev-dependencies only referenced from some test modules
#[cfg(test)]
use tokio_test as _;
