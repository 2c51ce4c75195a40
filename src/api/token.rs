use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

use crate::{api::upstream_error, info, spotify, warning};

/// `POST /access-token`
///
/// Performs a fresh client-credentials exchange on every call; tokens are
/// never cached or reused across requests.
pub async fn access_token() -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match spotify::auth::request_access_token().await {
        Ok(token) => {
            info!("Access token exchange finished");
            Ok(Json(json!({ "access_token": token.access_token })))
        }
        Err(e) => {
            warning!("Failed to obtain access token: {}", e);
            Err(upstream_error("Failed to obtain access token"))
        }
    }
}
