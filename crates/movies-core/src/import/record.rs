//! Row shape of the nominee list.

use std::ops::RangeInclusive;

use serde::Deserialize;

use super::parse_winner;
use crate::domain::NewMovie;

/// Years accepted from the nominee list.
pub const YEAR_RANGE: RangeInclusive<i32> = 1..=9999;

/// One CSV row, bound to columns by header name.
///
/// Every column is optional at the decoding level; validation happens in
/// [`MovieRecord::into_new_movie`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MovieRecord {
    pub year: String,
    pub title: String,
    pub studios: String,
    pub producers: String,
    pub winner: String,
}

impl MovieRecord {
    /// Validate the row and convert it into a movie ready for insertion.
    pub fn into_new_movie(self) -> Result<NewMovie, String> {
        let year = self
            .year
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid year {:?}: {e}", self.year))?;
        if !YEAR_RANGE.contains(&year) {
            return Err(format!(
                "year {year} outside {}..={}",
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            ));
        }

        Ok(NewMovie {
            year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner: parse_winner(&self.winner),
        })
    }
}
