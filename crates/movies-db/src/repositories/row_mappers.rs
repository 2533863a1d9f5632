//! Row mapping helpers for `SQLite` queries.

use movies_core::{Movie, RepositoryError};
use sqlx::Row;

/// Shared SELECT column list for movie queries.
pub const MOVIE_SELECT_COLUMNS: &str = "id, year, title, studios, producers, winner";

/// Map any `sqlx` failure onto the storage variant of the port error.
pub fn storage_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::RowNotFound => RepositoryError::NotFound("movie".to_string()),
        sqlx::Error::Database(db) if db.is_check_violation() || db.is_unique_violation() => {
            RepositoryError::Constraint(db.to_string())
        }
        other => RepositoryError::Storage(other.to_string()),
    }
}

/// Parse a database row into a Movie.
pub fn row_to_movie(row: &sqlx::sqlite::SqliteRow) -> Result<Movie, RepositoryError> {
    Ok(Movie {
        id: row.try_get("id").map_err(storage_error)?,
        year: row.try_get("year").map_err(storage_error)?,
        title: row.try_get("title").map_err(storage_error)?,
        studios: row.try_get("studios").map_err(storage_error)?,
        producers: row.try_get("producers").map_err(storage_error)?,
        winner: row.try_get("winner").map_err(storage_error)?,
    })
}
