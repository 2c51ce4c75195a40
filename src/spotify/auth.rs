use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    config,
    types::{ProxyToken, Token},
};

/// Performs an OAuth 2.0 client-credentials exchange with Spotify.
///
/// Sends the statically configured client ID and secret as a base64-encoded
/// basic-auth header to the accounts service and requests a token with the
/// `client_credentials` grant type. Every call performs a full exchange;
/// no token is cached or reused.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh access token with type and expiry metadata
/// - `Err(reqwest::Error)` - Network error, non-2xx upstream status, or
///   malformed response body
///
/// # Error Conditions
///
/// Common failures include:
/// - Network connectivity issues
/// - Invalid client credentials (upstream 400/401)
/// - Spotify accounts service errors
///
/// No distinction is made between these causes; callers surface them all
/// as a single generic failure.
///
/// # Example
///
/// ```
/// let token = request_access_token().await?;
/// println!("Access token: {}", token.access_token);
/// ```
///
/// # API Documentation
///
/// Uses Spotify's token endpoint with the "client_credentials" grant type
/// as specified in the OAuth 2.0 specification.
pub async fn request_access_token() -> Result<Token, reqwest::Error> {
    let credentials = STANDARD.encode(format!(
        "{client_id}:{client_secret}",
        client_id = config::spotify_client_id(),
        client_secret = config::spotify_client_secret()
    ));

    let client = Client::new();
    let response = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", credentials))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    response.json::<Token>().await
}

/// Fetches an access token from the server's own `/access-token` endpoint.
///
/// Resource handlers obtain their bearer token by POSTing to this server's
/// token route at the configured `BASE_URL` rather than by invoking
/// [`request_access_token`] in-process. The extra HTTP round trip is part
/// of the service's observable behavior.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(String)` - The bearer token string for upstream requests
/// - `Err(reqwest::Error)` - Network error or a 500 from the token route
///
/// # Example
///
/// ```
/// let token = fetch_proxy_token().await?;
/// ```
pub async fn fetch_proxy_token() -> Result<String, reqwest::Error> {
    let client = Client::new();
    let api_url = format!("{uri}/access-token", uri = &config::base_url());

    let response = client.post(&api_url).send().await?.error_for_status()?;
    let token = response.json::<ProxyToken>().await?;

    Ok(token.access_token)
}
