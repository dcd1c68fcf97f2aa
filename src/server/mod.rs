//! HTTP JSON API over a loaded archive
//!
//! - `GET /api/search?q=<query>&deep=<bool>` - array of search results
//! - `GET /api/conversation/:uuid` - full conversation, or 404

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::store::ConversationStore;

/// Shared, read-only state handed to every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ConversationStore>,
}

impl AppState {
    pub fn new(store: ConversationStore) -> Self {
        Self { store: Arc::new(store) }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/search", get(handlers::search_conversations))
        .route("/api/conversation/:uuid", get(handlers::get_conversation))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until Ctrl-C
pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let bind_addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    let local_addr: SocketAddr = listener.local_addr().context("Failed to read local address")?;
    info!(conversations = state.store.len(), "Starting server on http://{}", local_addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
