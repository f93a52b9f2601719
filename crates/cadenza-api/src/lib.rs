pub mod handlers;

use axum::{
    routing::{get, put},
    Json, Router,
};
use cadenza_application::AppState;
use handlers::albums::{create_album, list_albums, AlbumResponse, CreateAlbumRequest, __path_create_album, __path_list_albums};
use handlers::artists::{
    create_artist, list_artists, most_popular_artist, ArtistResponse, CreateArtistRequest,
    MostPopularArtistResponse, __path_create_artist, __path_list_artists,
    __path_most_popular_artist,
};
use handlers::playlists::{
    create_playlist_by_length, create_playlist_by_names, join_playlist, list_playlists,
    CreatePlaylistByLengthRequest, CreatePlaylistByNamesRequest, JoinPlaylistRequest,
    PlaylistResponse, __path_create_playlist_by_length, __path_create_playlist_by_names,
    __path_join_playlist, __path_list_playlists,
};
use handlers::songs::{
    create_song, like_song, list_songs, most_popular_song, CreateSongRequest, LikeSongRequest,
    MostPopularSongResponse, SongResponse, __path_create_song, __path_like_song,
    __path_list_songs, __path_most_popular_song,
};
use handlers::users::{
    create_user, list_users, CreateUserRequest, UserResponse, __path_create_user,
    __path_list_users,
};
use handlers::ErrorResponse;
use serde::Serialize;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Serialize, utoipa::ToSchema)]
struct HealthResponse {
    status: &'static str,
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "system"
)]
#[allow(dead_code)]
async fn health() -> Json<HealthResponse> {
    health_handler().await
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        create_user,
        list_users,
        create_artist,
        list_artists,
        most_popular_artist,
        create_album,
        list_albums,
        create_song,
        list_songs,
        like_song,
        most_popular_song,
        create_playlist_by_length,
        create_playlist_by_names,
        join_playlist,
        list_playlists,
    ),
    components(
        schemas(
            HealthResponse,
            CreateUserRequest,
            UserResponse,
            CreateArtistRequest,
            ArtistResponse,
            MostPopularArtistResponse,
            CreateAlbumRequest,
            AlbumResponse,
            CreateSongRequest,
            LikeSongRequest,
            SongResponse,
            MostPopularSongResponse,
            CreatePlaylistByLengthRequest,
            CreatePlaylistByNamesRequest,
            JoinPlaylistRequest,
            PlaylistResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "users", description = "User registration and listing"),
        (name = "artists", description = "Artist catalog and popularity"),
        (name = "albums", description = "Album catalog"),
        (name = "songs", description = "Song catalog, likes, and popularity"),
        (name = "playlists", description = "Playlist creation and membership")
    ),
    info(
        title = "Cadenza API",
        version = "0.1.0",
        description = "In-memory music catalog service written in Rust",
    )
)]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    info!(target: "api", "building router");

    let api_v1 = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/artists", get(list_artists).post(create_artist))
        .route("/artists/popular", get(most_popular_artist))
        .route("/albums", get(list_albums).post(create_album))
        .route("/songs", get(list_songs).post(create_song))
        .route("/songs/popular", get(most_popular_song))
        .route("/songs/:title/likes", put(like_song))
        .route("/playlists", get(list_playlists))
        .route("/playlists/by-length", axum::routing::post(create_playlist_by_length))
        .route("/playlists/by-names", axum::routing::post(create_playlist_by_names))
        .route("/playlists/:title/listeners", put(join_playlist));

    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api_v1)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", openapi))
        .with_state(state)
}
