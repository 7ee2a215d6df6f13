use std::sync::Arc;

use tower_http::cors::CorsLayer;

use estate_core::cache::{ResponseCache, spawn_eviction_task};
use estate_core::config::ServiceConfig;
use estate_core::notify::{NotificationHub, NotifyRouteState, notify_routes};
use estate_core::onboarding::{OnboardingRouteState, onboarding_routes};
use estate_core::users::{InMemoryUserStore, UserRouteState, UserStore, user_routes};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServiceConfig::from_env()?;

    eprintln!("🏠 Estate Core v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API:        http://0.0.0.0:{}/api", config.port);
    eprintln!(
        "   Status:     http://0.0.0.0:{}/api/onboarding/{{user_id}}/status",
        config.port
    );
    eprintln!(
        "   Stream:     http://0.0.0.0:{}/api/notifications/stream",
        config.port
    );

    // ── Shared components ───────────────────────────────────────────────
    let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
    let cache = ResponseCache::new(config.cache_ttl, config.cache_capacity);
    let hub = NotificationHub::new(config.hub_capacity);

    let _sweep = spawn_eviction_task(Arc::clone(&cache), config.sweep_interval);

    // ── Router ──────────────────────────────────────────────────────────
    let app = axum::Router::new()
        .route("/health", axum::routing::get(health))
        .merge(onboarding_routes(OnboardingRouteState {
            store: Arc::clone(&store),
            cache: Arc::clone(&cache),
        }))
        .merge(notify_routes(NotifyRouteState {
            hub: hub.clone(),
            keepalive: config.sse_keepalive,
        }))
        .merge(user_routes(UserRouteState {
            store: Arc::clone(&store),
        }))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "Listening");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "estate-core"
    }))
}
