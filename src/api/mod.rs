//! # API Module
//!
//! This module provides the HTTP endpoints exposed by the Spotify proxy server.
//! Every handler is stateless and request-scoped: it acquires a fresh access
//! token, performs a single upstream call, and relays the upstream JSON body
//! to the caller.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`access_token`] - Performs the OAuth 2.0 client-credentials exchange
//!   against Spotify's accounts service and returns the bearer token string.
//!
//! ### Lookup by ID
//!
//! - [`track_by_id`], [`album_by_id`], [`artist_by_id`] - Fetch a single
//!   catalog object by its Spotify ID and relay it verbatim.
//!
//! ### Lookup by query
//!
//! - [`track_by_query`], [`album_by_query`], [`artist_by_query`] - Run a
//!   free-text catalog search scoped to one resource type with a fixed
//!   result limit of one.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning application status and
//!   version information.
//!
//! ## Error Handling
//!
//! Any upstream failure (network error, malformed credentials, or a non-2xx
//! upstream status) is reported as HTTP 500 with a static per-route message.
//! No distinction is made between failure causes; details are logged to the
//! console only.

mod health;
mod resources;
mod search;
mod token;

pub use health::health;
pub use resources::{album_by_id, artist_by_id, track_by_id};
pub use search::{album_by_query, artist_by_query, track_by_query};
pub use token::access_token;

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Generic 500 response carrying the route's static error message.
pub(crate) fn upstream_error(message: &'static str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
}
