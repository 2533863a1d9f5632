//! Shared helpers for movies-axum integration tests.

// Each test binary uses a different subset of these helpers
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use movies_axum::bootstrap::{AxumContext, CorsConfig};
use movies_axum::routes::create_router;
use movies_core::{Movie, MovieRepository, NewMovie, Repos, RepositoryError};
use movies_db::TestDb;

/// Build a nominee the way the award fixtures describe them.
pub fn movie(title: &str, year: i32, producers: &str, winner: bool) -> NewMovie {
    NewMovie {
        year,
        title: title.to_string(),
        studios: String::new(),
        producers: producers.to_string(),
        winner,
    }
}

/// Router over a fresh in-memory database seeded with `movies`.
pub async fn seeded_router(movies: &[NewMovie]) -> Router {
    let db = TestDb::new().await.expect("test database");
    let repos = db.repos();
    repos.movies.insert_all(movies).await.expect("seed movies");
    create_router(AxumContext::new(repos), &CorsConfig::AllowAll)
}

/// Issue a GET request and return status plus raw body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Issue a GET request and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Expected JSON from {uri}, got {:?}: {e}",
            String::from_utf8_lossy(&body)
        )
    });
    (status, json)
}

/// Repository whose every call fails with a storage error.
pub struct FailingRepository;

#[async_trait]
impl MovieRepository for FailingRepository {
    async fn insert(&self, _movie: &NewMovie) -> Result<Movie, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn insert_all(&self, _movies: &[NewMovie]) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn replace_all(&self, _movies: &[NewMovie]) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn list(&self) -> Result<Vec<Movie>, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn list_winners(&self) -> Result<Vec<Movie>, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::Storage("database unavailable".to_string()))
    }
}

/// Router whose storage is always down.
pub fn failing_router() -> Router {
    let repos = Repos::new(Arc::new(FailingRepository));
    create_router(AxumContext::new(repos), &CorsConfig::AllowAll)
}
