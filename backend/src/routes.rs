use axum::{http::Method, routing::get, Router};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

async fn health_check() -> &'static str {
    "OK"
}

/// Serves the built frontend. Paths that don't match a file get
/// `index.html`, so the client router can show `/upload` or its 404 page.
pub fn build_router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_origin(AllowOrigin::list([config.frontend_origin.clone()])),
        )
}
