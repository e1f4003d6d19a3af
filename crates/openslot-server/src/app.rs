//! Router

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::handlers::health_check;

/// Build the router: health endpoint plus the landing page bundle.
///
/// Unknown paths fall back to `index.html` so client-side routes resolve.
pub fn router(config: &ServerConfig) -> Router {
    let index = config.static_dir.join("index.html");
    let bundle = ServeDir::new(&config.static_dir).fallback(ServeFile::new(index));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(bundle)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
