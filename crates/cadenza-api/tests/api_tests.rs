// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests driving the router with in-process requests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use cadenza_application::AppState;
use cadenza_config::AppConfig;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    cadenza_api::router(AppState::new(AppConfig::default()))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let request = match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = request(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn like_workflow_credits_song_and_artist() {
    let app = app();

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/artists",
        Some(json!({"name": "Nocturne"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    request(
        &app,
        "POST",
        "/api/v1/albums",
        Some(json!({"title": "Blue Hour", "artist": "Nocturne"})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/songs",
        Some(json!({"title": "Aurora", "album": "Blue Hour", "length_secs": 180})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/users",
        Some(json!({"name": "Asha", "mobile": "111"})),
    )
    .await;

    let (status, song) = request(
        &app,
        "PUT",
        "/api/v1/songs/Aurora/likes",
        Some(json!({"mobile": "111"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(song["likes"], 1);

    let (_, artist) = request(&app, "GET", "/api/v1/artists/popular", None).await;
    assert_eq!(artist["name"], "Nocturne");
    let (_, popular) = request(&app, "GET", "/api/v1/songs/popular", None).await;
    assert_eq!(popular["title"], "Aurora");

    let (_, artists) = request(&app, "GET", "/api/v1/artists", None).await;
    assert_eq!(artists[0]["likes"], 1);
}

#[tokio::test]
async fn creating_song_under_unknown_album_is_404() {
    let app = app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/songs",
        Some(json!({"title": "S2", "album": "NoSuchAlbum", "length_secs": 100})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "album does not exist: NoSuchAlbum");
}

#[tokio::test]
async fn playlist_for_unknown_user_is_404() {
    let app = app();
    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/playlists/by-names",
        Some(json!({"mobile": "999", "title": "P", "songs": ["S"]})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "user does not exist: 999");
}

#[tokio::test]
async fn playlist_lifecycle_over_http() {
    let app = app();

    request(
        &app,
        "POST",
        "/api/v1/albums",
        Some(json!({"title": "Blue Hour", "artist": "Nocturne"})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/songs",
        Some(json!({"title": "Aurora", "album": "Blue Hour", "length_secs": 180})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/songs",
        Some(json!({"title": "Umbra", "album": "Blue Hour", "length_secs": 240})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/users",
        Some(json!({"name": "Asha", "mobile": "111"})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/v1/users",
        Some(json!({"name": "Binh", "mobile": "222"})),
    )
    .await;

    let (status, playlist) = request(
        &app,
        "POST",
        "/api/v1/playlists/by-length",
        Some(json!({"mobile": "111", "title": "Mix", "length_secs": 180})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(playlist["creator"], "111");
    assert_eq!(playlist["songs"], json!(["Aurora"]));
    assert_eq!(playlist["listeners"], json!(["111"]));

    let (status, joined) = request(
        &app,
        "PUT",
        "/api/v1/playlists/Mix/listeners",
        Some(json!({"mobile": "222"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(joined["listeners"], json!(["111", "222"]));

    // joining again is a no-op
    let (_, rejoined) = request(
        &app,
        "PUT",
        "/api/v1/playlists/Mix/listeners",
        Some(json!({"mobile": "222"})),
    )
    .await;
    assert_eq!(rejoined["listeners"], json!(["111", "222"]));

    let (_, playlists) = request(&app, "GET", "/api/v1/playlists", None).await;
    assert_eq!(playlists.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn popularity_is_empty_before_any_like() {
    let app = app();
    let (_, artist) = request(&app, "GET", "/api/v1/artists/popular", None).await;
    assert_eq!(artist["name"], "");
    let (_, song) = request(&app, "GET", "/api/v1/songs/popular", None).await;
    assert_eq!(song["title"], "");
}
