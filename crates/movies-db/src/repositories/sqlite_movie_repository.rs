//! `SQLite` implementation of the `MovieRepository` trait.

use async_trait::async_trait;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::debug;

use movies_core::{Movie, MovieRepository, NewMovie, RepositoryError};

use super::row_mappers::{MOVIE_SELECT_COLUMNS, row_to_movie, storage_error};

const INSERT_MOVIE: &str =
    "INSERT INTO movie (year, title, studios, producers, winner) VALUES (?, ?, ?, ?, ?)";

async fn insert_rows(conn: &mut SqliteConnection, movies: &[NewMovie]) -> Result<(), RepositoryError> {
    for movie in movies {
        sqlx::query(INSERT_MOVIE)
            .bind(movie.year)
            .bind(&movie.title)
            .bind(&movie.studios)
            .bind(&movie.producers)
            .bind(movie.winner)
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;
    }
    Ok(())
}

/// `SQLite` implementation of the `MovieRepository` trait.
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    /// Create a new `SQLite` movie repository.
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, RepositoryError> {
        let result = sqlx::query(INSERT_MOVIE)
            .bind(movie.year)
            .bind(&movie.title)
            .bind(&movie.studios)
            .bind(&movie.producers)
            .bind(movie.winner)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(movie.clone().with_id(result.last_insert_rowid()))
    }

    async fn insert_all(&self, movies: &[NewMovie]) -> Result<usize, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;
        insert_rows(&mut *tx, movies).await?;
        tx.commit().await.map_err(storage_error)?;

        debug!(count = movies.len(), "Inserted movie batch");
        Ok(movies.len())
    }

    async fn replace_all(&self, movies: &[NewMovie]) -> Result<usize, RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let deleted = sqlx::query("DELETE FROM movie")
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?
            .rows_affected();
        insert_rows(&mut *tx, movies).await?;

        tx.commit().await.map_err(storage_error)?;
        debug!(deleted, count = movies.len(), "Replaced movie table");
        Ok(movies.len())
    }

    async fn list(&self) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!("SELECT {MOVIE_SELECT_COLUMNS} FROM movie ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn list_winners(&self) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!(
            "SELECT {MOVIE_SELECT_COLUMNS} FROM movie WHERE winner = 1 ORDER BY year, id"
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        rows.iter().map(row_to_movie).collect()
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movie")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(count)
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM movie")
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(result.rows_affected())
    }
}
