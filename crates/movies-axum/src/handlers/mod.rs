//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `MovieService`.

pub mod movies;
