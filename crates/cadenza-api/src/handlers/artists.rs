// SPDX-License-Identifier: GPL-3.0-or-later
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cadenza_application::AppState;
use cadenza_domain::Artist;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::ErrorResponse;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArtistRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArtistResponse {
    pub name: String,
    pub likes: u64,
}

impl From<Artist> for ArtistResponse {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name.to_string(),
            likes: artist.likes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MostPopularArtistResponse {
    /// Empty when no artist has received a like yet.
    pub name: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Register an artist. Registering a known name returns the existing artist.
#[utoipa::path(
    post,
    path = "/api/v1/artists",
    request_body = CreateArtistRequest,
    responses(
        (status = 201, description = "Artist registered", body = ArtistResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "artists"
)]
pub async fn create_artist(
    State(state): State<AppState>,
    Json(request): Json<CreateArtistRequest>,
) -> impl IntoResponse {
    debug!(target: "api", artist = %request.name, "creating artist");
    let artist = state.service.create_artist(&request.name);
    (StatusCode::CREATED, Json(ArtistResponse::from(artist)))
}

/// List all artists in creation order
#[utoipa::path(
    get,
    path = "/api/v1/artists",
    responses(
        (status = 200, description = "List of artists", body = Vec<ArtistResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "artists"
)]
pub async fn list_artists(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "listing artists");
    let artists: Vec<ArtistResponse> = state
        .service
        .artists()
        .into_iter()
        .map(ArtistResponse::from)
        .collect();
    Json(artists)
}

/// The artist with the strictly highest like count; ties go to the artist
/// created earliest.
#[utoipa::path(
    get,
    path = "/api/v1/artists/popular",
    responses(
        (status = 200, description = "Most popular artist", body = MostPopularArtistResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "artists"
)]
pub async fn most_popular_artist(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "querying most popular artist");
    Json(MostPopularArtistResponse {
        name: state.service.most_popular_artist(),
    })
}
