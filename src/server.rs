use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use crate::{api, config, error, success};

/// Builds the proxy router with all routes and the permissive CORS layer.
///
/// Cross-origin requests are allowed from any origin, matching the proxy's
/// role as a public credential front for browser clients.
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(api::health))
        .route("/access-token", post(api::access_token))
        .route("/get-track/{id}", get(api::track_by_id))
        .route("/get-album/{id}", get(api::album_by_id))
        .route("/get-artist/{id}", get(api::artist_by_id))
        .route("/get-track", get(api::track_by_query))
        .route("/get-album", get(api::album_by_query))
        .route("/get-artist", get(api::artist_by_query))
        .layer(cors)
}

pub async fn start_api_server(port_override: Option<u16>) {
    let port = port_override.unwrap_or_else(config::port);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    success!("Server started on http://localhost:{}", port);

    if let Err(e) = axum::serve(listener, router()).await {
        error!("Server terminated: {}", e);
    }
}
