//! REST endpoints for onboarding status and the requirement catalog.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::warn;
use uuid::Uuid;

use crate::cache::ResponseCache;
use crate::users::model::Role;
use crate::users::store::UserStore;

use super::catalog::{RequirementView, requirements_for_role};
use super::progress::compute_onboarding_state;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub store: Arc<dyn UserStore>,
    pub cache: Arc<ResponseCache>,
}

/// GET /api/onboarding/{user_id}/status
///
/// Recomputed from the stored user snapshot on every request — status is
/// never served from the cache.
async fn get_status(
    State(state): State<OnboardingRouteState>,
    Path(user_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.store.get_user(user_id).await {
        Ok(Some(user)) => {
            Json(serde_json::to_value(compute_onboarding_state(&user)).unwrap_or_default())
                .into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Unknown user"})),
        )
            .into_response(),
        Err(e) => {
            warn!(%user_id, "Failed to load user: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Storage failure"})),
            )
                .into_response()
        }
    }
}

/// GET /api/onboarding/requirements/{role}
///
/// The catalog is static per role, so the rendered response is kept in the
/// TTL cache.
async fn get_requirements(
    State(state): State<OnboardingRouteState>,
    Path(role): Path<Role>,
) -> impl IntoResponse {
    let key = format!("onboarding:requirements:{role}");
    if let Some(cached) = state.cache.get(&key).await {
        return Json(cached);
    }

    let views: Vec<RequirementView> = requirements_for_role(role).map(Into::into).collect();
    let body = serde_json::json!({ "role": role, "requirements": views });
    state.cache.insert(key, body.clone()).await;
    Json(body)
}

/// Build the onboarding REST routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/{user_id}/status", get(get_status))
        .route("/api/onboarding/requirements/{role}", get(get_requirements))
        .with_state(state)
}
