//! Startup import tests: bootstrap a server from a nominee list on disk.

mod common;

use std::io::Write;

use axum::http::StatusCode;
use tempfile::NamedTempFile;

use common::get_json;
use movies_axum::bootstrap::{CorsConfig, ServerConfig, bootstrap};
use movies_axum::routes::create_router;

fn nominee_list(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "year;title;studios;producers;winner").unwrap();
    for line in lines {
        writeln!(file, "{line}").unwrap();
    }
    file
}

#[tokio::test]
async fn imports_nominee_list_on_startup() {
    let csv = nominee_list(&[
        "1984;Bolero;Cannon Films;Bo Derek;yes",
        "1985;Rambo: First Blood Part II;Columbia Pictures;Buzz Feitshans;yes",
        "1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes",
        "1990;The Adventures of Ford Fairlane;20th Century Fox;Steven Perry and Joel Silver;yes",
        "1991;Hudson Hawk;TriStar Pictures;Joel Silver;yes",
        "1992;Shining Through;20th Century Fox;Carol Baum and Howard Rosenman;",
    ]);
    let config = ServerConfig::with_defaults().with_csv_path(csv.path());

    let ctx = bootstrap(&config).await.unwrap();
    assert_eq!(ctx.movies.count().await.unwrap(), 6);

    let (status, json) = get_json(create_router(ctx, &CorsConfig::AllowAll), "/movie/awards-result").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["min"],
        serde_json::json!([
            { "producers": "Bo Derek", "interval": 6, "previousWin": 1984, "followingWin": 1990 }
        ])
    );
    assert_eq!(json["max"], json["min"]);
}

#[tokio::test]
async fn honours_custom_separator() {
    let mut csv = NamedTempFile::new().unwrap();
    writeln!(csv, "year,title,studios,producers,winner").unwrap();
    writeln!(csv, "2000,First,S,Producer A,yes").unwrap();
    writeln!(csv, "2002,Second,S,Producer A,yes").unwrap();

    let config = ServerConfig::with_defaults()
        .with_csv_path(csv.path())
        .with_csv_separator(b',');

    let ctx = bootstrap(&config).await.unwrap();
    assert_eq!(ctx.movies.count().await.unwrap(), 2);
}

#[tokio::test]
async fn missing_nominee_list_still_boots() {
    let config = ServerConfig::with_defaults().with_csv_path("/nonexistent/movielist.csv");

    let ctx = bootstrap(&config).await.unwrap();
    assert_eq!(ctx.movies.count().await.unwrap(), 0);

    let (status, json) = get_json(create_router(ctx, &CorsConfig::AllowAll), "/movie/awards-result").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn without_import_starts_empty() {
    let ctx = bootstrap(&ServerConfig::with_defaults().without_import())
        .await
        .unwrap();
    assert_eq!(ctx.movies.count().await.unwrap(), 0);
}

#[tokio::test]
async fn bundled_nominee_list_imports() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/movielist.csv");
    let ctx = bootstrap(&ServerConfig::with_defaults().with_csv_path(path))
        .await
        .unwrap();

    assert!(ctx.movies.count().await.unwrap() > 0);
}

#[tokio::test]
async fn restart_against_file_database_does_not_duplicate_nominees() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("movies.db").display());
    let csv = nominee_list(&[
        "1984;Bolero;Cannon Films;Bo Derek;yes",
        "1985;Rambo: First Blood Part II;Columbia Pictures;Buzz Feitshans;yes",
        "1990;Ghosts Can't Do It;Triumph Releasing;Bo Derek;yes",
    ]);
    let config = ServerConfig::with_defaults()
        .with_database_url(url)
        .with_csv_path(csv.path());

    let first = bootstrap(&config).await.unwrap();
    assert_eq!(first.movies.count().await.unwrap(), 3);
    drop(first);

    let restarted = bootstrap(&config).await.unwrap();
    assert_eq!(restarted.movies.count().await.unwrap(), 3);

    let (status, json) =
        get_json(create_router(restarted, &CorsConfig::AllowAll), "/movie/awards-result").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["min"],
        serde_json::json!([
            { "producers": "Bo Derek", "interval": 6, "previousWin": 1984, "followingWin": 1990 }
        ])
    );
}
