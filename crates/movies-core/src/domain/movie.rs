//! Movie domain types.

use serde::{Deserialize, Serialize};

/// A nominated movie that exists in the system with a database ID.
///
/// Use `NewMovie` for movies that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Database ID of the movie.
    pub id: i64,
    /// Award year the movie was nominated in.
    pub year: i32,
    pub title: String,
    pub studios: String,
    /// Producers exactly as listed in the source data.
    ///
    /// This string is the grouping key for award intervals; a movie with
    /// several producers is one entry, not one per person.
    pub producers: String,
    /// Whether the movie won the award in its year.
    pub winner: bool,
}

/// A movie to be inserted into the system (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub year: i32,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: bool,
}

impl NewMovie {
    /// Attach a database ID, producing the persisted form.
    #[must_use]
    pub fn with_id(self, id: i64) -> Movie {
        Movie {
            id,
            year: self.year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: self.winner,
        }
    }
}
