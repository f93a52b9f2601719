// SPDX-License-Identifier: GPL-3.0-or-later
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadenza_application::{AppState, PlaylistSummary};
use cadenza_domain::SongTitle;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::{error_response, ErrorResponse};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlaylistByLengthRequest {
    /// Mobile of the creating user; must already be registered.
    pub mobile: String,
    pub title: String,
    /// Every catalog song of exactly this length lands in the snapshot.
    pub length_secs: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePlaylistByNamesRequest {
    pub mobile: String,
    pub title: String,
    /// Song titles to pull into the snapshot; unknown titles are skipped.
    pub songs: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinPlaylistRequest {
    pub mobile: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlaylistResponse {
    pub title: String,
    pub creator: String,
    pub songs: Vec<String>,
    pub listeners: Vec<String>,
}

impl From<PlaylistSummary> for PlaylistResponse {
    fn from(summary: PlaylistSummary) -> Self {
        Self {
            title: summary.playlist.title.to_string(),
            creator: summary.playlist.creator.to_string(),
            songs: summary.songs.iter().map(|s| s.to_string()).collect(),
            listeners: summary.listeners.iter().map(|m| m.to_string()).collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Create a playlist whose snapshot is every catalog song with exactly the
/// given length. The creating user is the sole initial listener.
#[utoipa::path(
    post,
    path = "/api/v1/playlists/by-length",
    request_body = CreatePlaylistByLengthRequest,
    responses(
        (status = 201, description = "Playlist created", body = PlaylistResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "playlists"
)]
pub async fn create_playlist_by_length(
    State(state): State<AppState>,
    Json(request): Json<CreatePlaylistByLengthRequest>,
) -> Response {
    debug!(
        target: "api",
        playlist = %request.title, user = %request.mobile, length = request.length_secs,
        "creating playlist by length"
    );
    match state.service.create_playlist_by_length(
        &request.mobile,
        &request.title,
        request.length_secs,
    ) {
        Ok(summary) => {
            (StatusCode::CREATED, Json(PlaylistResponse::from(summary))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Create a playlist whose snapshot is every catalog song named in the
/// request, in catalog insertion order.
#[utoipa::path(
    post,
    path = "/api/v1/playlists/by-names",
    request_body = CreatePlaylistByNamesRequest,
    responses(
        (status = 201, description = "Playlist created", body = PlaylistResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "playlists"
)]
pub async fn create_playlist_by_names(
    State(state): State<AppState>,
    Json(request): Json<CreatePlaylistByNamesRequest>,
) -> Response {
    debug!(
        target: "api",
        playlist = %request.title, user = %request.mobile, songs = request.songs.len(),
        "creating playlist by names"
    );
    let wanted: Vec<SongTitle> = request
        .songs
        .iter()
        .map(|title| SongTitle::from(title.as_str()))
        .collect();
    match state
        .service
        .create_playlist_by_names(&request.mobile, &request.title, &wanted)
    {
        Ok(summary) => {
            (StatusCode::CREATED, Json(PlaylistResponse::from(summary))).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Add a user to a playlist's listener set. A no-op when the user is the
/// creator or already listens.
#[utoipa::path(
    put,
    path = "/api/v1/playlists/{title}/listeners",
    params(
        ("title" = String, Path, description = "Playlist title")
    ),
    request_body = JoinPlaylistRequest,
    responses(
        (status = 200, description = "Playlist after the join", body = PlaylistResponse),
        (status = 404, description = "User or playlist not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "playlists"
)]
pub async fn join_playlist(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(request): Json<JoinPlaylistRequest>,
) -> Response {
    debug!(target: "api", playlist = %title, user = %request.mobile, "joining playlist");
    match state.service.join_playlist(&request.mobile, &title) {
        Ok(summary) => Json(PlaylistResponse::from(summary)).into_response(),
        Err(err) => error_response(err),
    }
}

/// List all playlists in creation order
#[utoipa::path(
    get,
    path = "/api/v1/playlists",
    responses(
        (status = 200, description = "List of playlists", body = Vec<PlaylistResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "playlists"
)]
pub async fn list_playlists(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "listing playlists");
    let playlists: Vec<PlaylistResponse> = state
        .service
        .playlists()
        .into_iter()
        .map(PlaylistResponse::from)
        .collect();
    Json(playlists)
}
