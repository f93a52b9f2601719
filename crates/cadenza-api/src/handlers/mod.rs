// SPDX-License-Identifier: GPL-3.0-or-later
pub mod albums;
pub mod artists;
pub mod playlists;
pub mod songs;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use cadenza_catalog::CatalogError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a catalog failure onto a client-facing response. The catalog's only
/// failure mode is a missing entity, which is a 404.
pub fn error_response(err: CatalogError) -> Response {
    match err {
        CatalogError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: err.to_string(),
            }),
        )
            .into_response(),
    }
}
