// SPDX-License-Identifier: GPL-3.0-or-later
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use cadenza_application::AppState;
use cadenza_domain::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::ErrorResponse;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub mobile: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub mobile: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            mobile: user.mobile.to_string(),
            name: user.name,
            created_at: user.created_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Register a user by mobile number. Registering an already known mobile
/// returns the existing user unchanged.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    debug!(target: "api", mobile = %request.mobile, "registering user");
    let user = state.service.create_user(&request.name, &request.mobile);
    (StatusCode::CREATED, Json(UserResponse::from(user)))
}

/// List all registered users in registration order
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    debug!(target: "api", "listing users");
    let users: Vec<UserResponse> = state
        .service
        .users()
        .into_iter()
        .map(UserResponse::from)
        .collect();
    Json(users)
}
