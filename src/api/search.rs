use axum::{Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::{api::upstream_error, info, spotify, spotify::search::SearchKind, warning};

/// Query parameters for the search endpoints.
///
/// A missing `q` is not rejected locally; the empty term is forwarded to
/// Spotify, whose own handling determines the response.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /get-track?q=...`
///
/// Runs a catalog search scoped to tracks with a fixed result limit of one
/// and relays the search response verbatim.
pub async fn track_by_query(
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for track search: {}", e);
            return Err(upstream_error("Failed to fetch requested track information"));
        }
    };

    match spotify::search::search(&params.q, SearchKind::Track, &token).await {
        Ok(result) => {
            info!("Track search finished");
            Ok(Json(result))
        }
        Err(e) => {
            warning!("Failed to search track '{}': {}", params.q, e);
            Err(upstream_error("Failed to fetch requested track information"))
        }
    }
}

/// `GET /get-album?q=...`
pub async fn album_by_query(
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for album search: {}", e);
            return Err(upstream_error("Failed to fetch requested album information"));
        }
    };

    match spotify::search::search(&params.q, SearchKind::Album, &token).await {
        Ok(result) => {
            info!("Album search finished");
            Ok(Json(result))
        }
        Err(e) => {
            warning!("Failed to search album '{}': {}", params.q, e);
            Err(upstream_error("Failed to fetch requested album information"))
        }
    }
}

/// `GET /get-artist?q=...`
pub async fn artist_by_query(
    Query(params): Query<SearchParams>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for artist search: {}", e);
            return Err(upstream_error(
                "Failed to fetch requested artist information",
            ));
        }
    };

    match spotify::search::search(&params.q, SearchKind::Artist, &token).await {
        Ok(result) => {
            info!("Artist search finished");
            Ok(Json(result))
        }
        Err(e) => {
            warning!("Failed to search artist '{}': {}", params.q, e);
            Err(upstream_error(
                "Failed to fetch requested artist information",
            ))
        }
    }
}
