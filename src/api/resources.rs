use axum::{Json, extract::Path, http::StatusCode};
use serde_json::Value;

use crate::{api::upstream_error, info, spotify, warning};

/// `GET /get-track/{id}`
///
/// Relays the Spotify track object for the given ID. The ID is not validated
/// locally; an unknown ID surfaces as the generic 500 response.
pub async fn track_by_id(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for track lookup: {}", e);
            return Err(upstream_error("Failed to fetch track information"));
        }
    };

    match spotify::tracks::get_track(&id, &token).await {
        Ok(track) => {
            info!("Track lookup finished");
            Ok(Json(track))
        }
        Err(e) => {
            warning!("Failed to fetch track {}: {}", id, e);
            Err(upstream_error("Failed to fetch track information"))
        }
    }
}

/// `GET /get-album/{id}`
pub async fn album_by_id(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for album lookup: {}", e);
            return Err(upstream_error("Failed to fetch album information"));
        }
    };

    match spotify::albums::get_album(&id, &token).await {
        Ok(album) => {
            info!("Album lookup finished");
            Ok(Json(album))
        }
        Err(e) => {
            warning!("Failed to fetch album {}: {}", id, e);
            Err(upstream_error("Failed to fetch album information"))
        }
    }
}

/// `GET /get-artist/{id}`
pub async fn artist_by_id(
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let token = match spotify::auth::fetch_proxy_token().await {
        Ok(token) => token,
        Err(e) => {
            warning!("Failed to obtain access token for artist lookup: {}", e);
            return Err(upstream_error("Failed to fetch artist information"));
        }
    };

    match spotify::artists::get_artist(&id, &token).await {
        Ok(artist) => {
            info!("Artist lookup finished");
            Ok(Json(artist))
        }
        Err(e) => {
            warning!("Failed to fetch artist {}: {}", id, e);
            Err(upstream_error("Failed to fetch artist information"))
        }
    }
}
