//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable JSON shape with explicit serialization
//! control, decoupled from the domain types in `movies-core`.

pub mod awards;

pub use awards::{AwardIntervalsDto, ProducerIntervalDto};
