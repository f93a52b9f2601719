// SPDX-License-Identifier: GPL-3.0-or-later
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cadenza_application::AppState;
use cadenza_domain::Album;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::ErrorResponse;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAlbumRequest {
    pub title: String,
    /// Owning artist; created on the fly when not yet registered.
    pub artist: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AlbumResponse {
    pub title: String,
    pub artist: String,
    pub release_date: DateTime<Utc>,
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            title: album.title.to_string(),
            artist: album.artist.to_string(),
            release_date: album.release_date,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Create an album under the named artist, vivifying the artist if needed.
/// Creating a known title returns the existing album.
#[utoipa::path(
    post,
    path = "/api/v1/albums",
    request_body = CreateAlbumRequest,
    responses(
        (status = 201, description = "Album created", body = AlbumResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn create_album(
    State(state): State<AppState>,
    Json(request): Json<CreateAlbumRequest>,
) -> impl IntoResponse {
    debug!(target: "api", album = %request.title, artist = %request.artist, "creating album");
    let album = state.service.create_album(&request.title, &request.artist);
    (StatusCode::CREATED, Json(AlbumResponse::from(album)))
}

/// List all albums in creation order
#[utoipa::path(
    get,
    path = "/api/v1/albums",
    responses(
        (status = 200, description = "List of albums", body = Vec<AlbumResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "albums"
)]
pub async fn list_albums(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "listing albums");
    let albums: Vec<AlbumResponse> = state
        .service
        .albums()
        .into_iter()
        .map(AlbumResponse::from)
        .collect();
    Json(albums)
}
