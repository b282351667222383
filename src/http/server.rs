//! HTTP server for the dashboard and API

use super::handler::{
    cell_type_collection_handler, cell_type_handler, ecm_collection_handler,
    ecm_component_handler, interactions_handler, proteases_handler, search_handler, stats_handler,
};
use crate::corpus::Corpus;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn dashboard_handler() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(page) => Html(String::from_utf8_lossy(page.data.as_ref()).into_owned()).into_response(),
        None => (StatusCode::NOT_FOUND, "dashboard page not embedded").into_response(),
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 8600,
        }
    }
}

impl ServerConfig {
    /// Default configuration with `ECM_ATLAS_ADDR`/`ECM_ATLAS_PORT` overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(address) = std::env::var("ECM_ATLAS_ADDR") {
            config.address = address;
        }
        if let Some(port) = std::env::var("ECM_ATLAS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
        {
            config.port = port;
        }
        config
    }
}

/// Build the API router over an immutable corpus.
///
/// Exposed separately from [`HttpServer`] so integration tests can drive the
/// routes with `tower::ServiceExt::oneshot` without binding a socket.
pub fn router(corpus: Arc<Corpus>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/proteases", get(proteases_handler))
        .route("/api/ecm", get(ecm_collection_handler))
        .route("/api/ecm/:name", get(ecm_component_handler))
        .route("/api/cell-types", get(cell_type_collection_handler))
        .route("/api/cell-types/:name", get(cell_type_handler))
        .route("/api/interactions", get(interactions_handler))
        .route("/api/search", get(search_handler))
        .layer(CorsLayer::permissive())
        .with_state(corpus)
}

/// HTTP server managing the dashboard and the atlas API
pub struct HttpServer {
    config: ServerConfig,
    corpus: Arc<Corpus>,
}

impl HttpServer {
    /// Create a new HTTP server over a loaded corpus
    pub fn new(config: ServerConfig, corpus: Corpus) -> Self {
        Self {
            config,
            corpus: Arc::new(corpus),
        }
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(Arc::clone(&self.corpus));

        let addr = format!("{}:{}", self.config.address, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Dashboard available at http://{}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}
