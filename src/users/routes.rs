//! User management endpoints backing the in-memory store.
//!
//! The production platform creates users through its auth subsystem; these
//! routes exist so local runs and integration tests can load snapshots into
//! the store over HTTP.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{info, warn};

use super::model::User;
use super::store::UserStore;

/// Shared state for user routes.
#[derive(Clone)]
pub struct UserRouteState {
    pub store: Arc<dyn UserStore>,
}

/// POST /api/users — insert or replace a user record.
async fn upsert_user(
    State(state): State<UserRouteState>,
    Json(user): Json<User>,
) -> impl IntoResponse {
    let id = user.id;
    let role = user.role;
    match state.store.upsert_user(user).await {
        Ok(()) => {
            info!(%id, %role, "User upserted");
            (StatusCode::CREATED, Json(serde_json::json!({ "id": id }))).into_response()
        }
        Err(e) => {
            warn!(%id, "Failed to upsert user: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Storage failure"})),
            )
                .into_response()
        }
    }
}

/// GET /api/users — list all stored users.
async fn list_users(State(state): State<UserRouteState>) -> impl IntoResponse {
    match state.store.list_users().await {
        Ok(users) => Json(serde_json::json!({ "users": users })).into_response(),
        Err(e) => {
            warn!("Failed to list users: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Storage failure"})),
            )
                .into_response()
        }
    }
}

/// Build the user management routes.
pub fn user_routes(state: UserRouteState) -> Router {
    Router::new()
        .route("/api/users", get(list_users).post(upsert_user))
        .with_state(state)
}
