//! Axum web server — the front end's view of the flight core.

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Shared state for the web layer.
pub struct WebState {
    pub root: Arc<AppState>,
    pub addr: SocketAddr,
    pub request_count: AtomicU64,
}

impl WebState {
    pub fn new(root: Arc<AppState>, addr: SocketAddr) -> Self {
        Self {
            root,
            addr,
            request_count: AtomicU64::new(0),
        }
    }
}

pub fn router(state: Arc<WebState>) -> Router {
    // Request counter middleware
    let counter_state = Arc::clone(&state);
    let count_middleware = axum::middleware::from_fn(move |req, next: axum::middleware::Next| {
        let st = Arc::clone(&counter_state);
        async move {
            st.request_count.fetch_add(1, Ordering::Relaxed);
            next.run(req).await
        }
    });

    Router::new()
        .route("/api/shot", get(routes::get_shot).post(routes::post_shot))
        .route("/api/classify", post(routes::post_classify))
        .route("/api/settings", get(routes::get_settings))
        .route("/api/settings/reload", post(routes::post_reload_settings))
        .layer(count_middleware)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run the web server until `shutdown` resolves.
pub async fn run(
    root: Arc<AppState>,
    addr: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let state = Arc::new(WebState::new(root, listener.local_addr()?));
    let app = router(Arc::clone(&state));

    tracing::info!("web server listening on {}", state.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!(
        "web server on {} stopped after {} requests",
        state.addr,
        state.request_count.load(Ordering::Relaxed)
    );
    Ok(())
}
