//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators between ports and domain logic;
//! they don't know about concrete implementations.

mod intervals;
mod movie_service;

pub use intervals::compute_award_intervals;
pub use movie_service::{ImportSummary, MovieService};
