//! Configuration management for the Spotify proxy server.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and a `.env` file. It provides a centralized way to manage application
//! configuration including Spotify API credentials, server settings, and upstream
//! endpoint URLs.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are ignored so that deployments configured purely through
/// real environment variables keep working without a `.env` file on disk.
///
/// # Example
///
/// ```
/// use spotiproxy::config;
///
/// fn main() {
///     config::load_env();
/// }
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the port the proxy server listens on.
///
/// Retrieves the `PORT` environment variable. Unset or unparsable values
/// fall back to the default port `3000`.
///
/// # Example
///
/// ```
/// let port = port(); // e.g., 3000
/// ```
pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable which contains
/// the client ID obtained when registering the application with Spotify's
/// developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
///
/// # Example
///
/// ```
/// let client_id = spotify_client_id(); // e.g., "abc123..."
/// ```
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable which contains
/// the client secret obtained when registering the application with Spotify's
/// developer platform. This is used for the client-credentials exchange.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Example
///
/// ```
/// let client_secret = spotify_client_secret(); // e.g., "def456..."
/// ```
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the base URL under which this server reaches itself.
///
/// Retrieves the `BASE_URL` environment variable. Handlers use this URL to
/// request an access token from the server's own `/access-token` endpoint.
/// Defaults to `http://localhost:{port}` when unset.
///
/// # Example
///
/// ```
/// let base_url = base_url(); // e.g., "http://localhost:3000"
/// ```
pub fn base_url() -> String {
    env::var("BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port()))
}

/// Returns the Spotify Web API base URL.
///
/// Retrieves the `SPOTIFY_API_URL` environment variable which contains the
/// base URL for Spotify's Web API endpoints. Defaults to the public API at
/// `https://api.spotify.com/v1`; overriding it lets tests point the proxy
/// at a stub upstream.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Retrieves the `SPOTIFY_API_TOKEN_URL` environment variable which contains
/// the URL the client-credentials exchange is sent to. Defaults to the public
/// accounts service at `https://accounts.spotify.com/api/token`.
///
/// # Example
///
/// ```
/// let token_url = spotify_apitoken_url(); // e.g., "https://accounts.spotify.com/api/token"
/// ```
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
