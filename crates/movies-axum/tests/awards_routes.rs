//! Integration tests for `GET /movie/awards-result`.

mod common;

use axum::http::StatusCode;

use common::{failing_router, get_json, movie, seeded_router};

const AWARDS_URI: &str = "/movie/awards-result";

#[tokio::test]
async fn reports_intervals_from_stored_winners() {
    let app = seeded_router(&[
        movie("Movie A", 1980, "Producer 1", true),
        movie("Movie B", 1981, "Producer 1", true),
        movie("Movie C", 1982, "Producer 2", true),
        movie("Movie D", 1995, "Producer 2", true),
        movie("Movie E", 1983, "Producer 3", false),
    ])
    .await;

    let (status, json) = get_json(app, AWARDS_URI).await;

    assert_eq!(status, StatusCode::OK);
    for list in ["min", "max"] {
        let entries = json[list].as_array().expect("array");
        assert_eq!(entries.len(), 2, "{list} should have two producers");
        assert_eq!(entries[0]["producers"], "Producer 1");
        assert_eq!(entries[0]["interval"], 1);
        assert_eq!(entries[1]["producers"], "Producer 2");
        assert_eq!(entries[1]["interval"], 13);
        assert_eq!(entries[1]["previousWin"], 1982);
        assert_eq!(entries[1]["followingWin"], 1995);
    }
}

#[tokio::test]
async fn empty_lists_when_nobody_won() {
    let app = seeded_router(&[
        movie("Movie A", 1980, "Producer 1", false),
        movie("Movie B", 1981, "Producer 2", false),
    ])
    .await;

    let (status, json) = get_json(app, AWARDS_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "min": [], "max": [] }));
}

#[tokio::test]
async fn empty_lists_for_empty_database() {
    let app = seeded_router(&[]).await;

    let (status, json) = get_json(app, AWARDS_URI).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["min"].as_array().unwrap().is_empty());
    assert!(json["max"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn ties_return_every_producer() {
    let app = seeded_router(&[
        movie("Movie A", 1980, "Producer A", true),
        movie("Movie B", 1981, "Producer A", true),
        movie("Movie C", 1985, "Producer B", true),
        movie("Movie D", 1986, "Producer B", true),
    ])
    .await;

    let (status, json) = get_json(app, AWARDS_URI).await;

    assert_eq!(status, StatusCode::OK);
    for list in ["min", "max"] {
        let entries = json[list].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["producers"], "Producer A");
        assert_eq!(entries[1]["producers"], "Producer B");
        assert!(entries.iter().all(|e| e["interval"] == 1));
    }
}

#[tokio::test]
async fn entries_carry_every_field() {
    let app = seeded_router(&[
        movie("Movie A", 1980, "Producer A", true),
        movie("Movie B", 1981, "Producer A", true),
    ])
    .await;

    let (_, json) = get_json(app, AWARDS_URI).await;
    let entry = &json["min"][0];

    assert!(entry["producers"].is_string());
    assert!(entry["interval"].is_number());
    assert_eq!(entry["previousWin"], 1980);
    assert_eq!(entry["followingWin"], 1981);
}

#[tokio::test]
async fn storage_failure_is_a_server_error() {
    let (status, json) = get_json(failing_router(), AWARDS_URI).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert!(json["error"].as_str().unwrap().contains("database unavailable"));
}
