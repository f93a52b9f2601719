// SPDX-License-Identifier: GPL-3.0-or-later
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cadenza_application::AppState;
use cadenza_domain::Song;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::{error_response, ErrorResponse};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSongRequest {
    pub title: String,
    /// Album the song belongs to; must already exist.
    pub album: String,
    pub length_secs: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeSongRequest {
    pub mobile: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SongResponse {
    pub title: String,
    pub album: String,
    pub length_secs: u32,
    pub likes: u64,
}

impl From<Song> for SongResponse {
    fn from(song: Song) -> Self {
        Self {
            title: song.title.to_string(),
            album: song.album.to_string(),
            length_secs: song.length_secs,
            likes: song.likes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MostPopularSongResponse {
    /// Empty when no song has received a like yet.
    pub title: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Add a song to an existing album. Unknown albums are a 404, not an
/// auto-vivification; a known song title returns the existing song.
#[utoipa::path(
    post,
    path = "/api/v1/songs",
    request_body = CreateSongRequest,
    responses(
        (status = 201, description = "Song created", body = SongResponse),
        (status = 404, description = "Album not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn create_song(
    State(state): State<AppState>,
    Json(request): Json<CreateSongRequest>,
) -> Response {
    debug!(target: "api", song = %request.title, album = %request.album, "creating song");
    match state
        .service
        .create_song(&request.title, &request.album, request.length_secs)
    {
        Ok(song) => (StatusCode::CREATED, Json(SongResponse::from(song))).into_response(),
        Err(err) => error_response(err),
    }
}

/// Record a like by a user on a song. The first like also credits the
/// song's owning artist; repeat likes by the same user change nothing.
#[utoipa::path(
    put,
    path = "/api/v1/songs/{title}/likes",
    params(
        ("title" = String, Path, description = "Song title")
    ),
    request_body = LikeSongRequest,
    responses(
        (status = 200, description = "Song after the like", body = SongResponse),
        (status = 404, description = "User or song not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn like_song(
    State(state): State<AppState>,
    Path(title): Path<String>,
    Json(request): Json<LikeSongRequest>,
) -> Response {
    debug!(target: "api", song = %title, user = %request.mobile, "liking song");
    match state.service.like_song(&request.mobile, &title) {
        Ok(song) => Json(SongResponse::from(song)).into_response(),
        Err(err) => error_response(err),
    }
}

/// List all songs in catalog insertion order
#[utoipa::path(
    get,
    path = "/api/v1/songs",
    responses(
        (status = 200, description = "List of songs", body = Vec<SongResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn list_songs(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "listing songs");
    let songs: Vec<SongResponse> = state
        .service
        .songs()
        .into_iter()
        .map(SongResponse::from)
        .collect();
    Json(songs)
}

/// The song with the strictly highest like count; ties go to the song
/// created earliest.
#[utoipa::path(
    get,
    path = "/api/v1/songs/popular",
    responses(
        (status = 200, description = "Most popular song", body = MostPopularSongResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "songs"
)]
pub async fn most_popular_song(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "querying most popular song");
    Json(MostPopularSongResponse {
        title: state.service.most_popular_song(),
    })
}
