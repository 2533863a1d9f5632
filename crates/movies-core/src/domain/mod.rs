//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, CSV layout).
//!
//! # Structure
//!
//! - `movie` - Nominated movie types (`Movie`, `NewMovie`)
//! - `awards` - Award interval results (`ProducerInterval`, `AwardIntervals`)

mod awards;
mod movie;

pub use awards::{AwardIntervals, ProducerInterval};
pub use movie::{Movie, NewMovie};
