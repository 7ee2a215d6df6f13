//! SSE endpoint relaying hub notifications to connected clients.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{info, warn};
use uuid::Uuid;

use super::hub::NotificationHub;
use super::model::{Notification, NotificationKind};

/// Shared state for notification routes.
#[derive(Clone)]
pub struct NotifyRouteState {
    pub hub: NotificationHub,
    /// Keep-alive comment interval for idle streams.
    pub keepalive: Duration,
}

#[derive(Debug, Deserialize)]
struct StreamParams {
    /// Viewer id; addressed notifications for other users are filtered out.
    user: Option<Uuid>,
}

// ── SSE stream ──────────────────────────────────────────────────────────

fn notification_stream(
    hub: NotificationHub,
    viewer: Option<Uuid>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let rx = hub.subscribe();
    BroadcastStream::new(rx).filter_map(move |result| async move {
        match result {
            Ok(notification) if notification.is_visible_to(viewer) => Event::default()
                .event("notification")
                .json_data(&notification)
                .ok()
                .map(Ok),
            Ok(_) => None,
            Err(e) => {
                // Lagged receiver — drop the missed events and keep streaming
                warn!("SSE subscriber error: {e}");
                None
            }
        }
    })
}

/// GET /api/notifications/stream
///
/// One-directional push; reconnect and backoff are the client's
/// (EventSource) job. Keep-alive comments keep proxies from closing idle
/// connections.
async fn stream_notifications(
    State(state): State<NotifyRouteState>,
    Query(params): Query<StreamParams>,
) -> impl IntoResponse {
    info!(
        viewer = ?params.user,
        clients = state.hub.subscriber_count() + 1,
        "SSE client connected"
    );
    Sse::new(notification_stream(state.hub.clone(), params.user)).keep_alive(
        KeepAlive::new()
            .interval(state.keepalive)
            .text("keep-alive"),
    )
}

// ── Debug publish ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PublishRequest {
    kind: NotificationKind,
    title: String,
    body: String,
    #[serde(default)]
    recipient: Option<Uuid>,
}

/// POST /api/notifications/test
///
/// Publish a notification by hand; development and smoke-test surface.
async fn publish_test(
    State(state): State<NotifyRouteState>,
    Json(req): Json<PublishRequest>,
) -> impl IntoResponse {
    let mut notification = Notification::new(req.kind, req.title, req.body);
    if let Some(recipient) = req.recipient {
        notification = notification.for_user(recipient);
    }
    let id = notification.id;
    state.hub.publish(notification);
    Json(serde_json::json!({ "published": id }))
}

/// Build the notification routes.
pub fn notify_routes(state: NotifyRouteState) -> Router {
    Router::new()
        .route("/api/notifications/stream", get(stream_notifications))
        .route("/api/notifications/test", post(publish_test))
        .with_state(state)
}
