use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Retrieves a single artist from the Spotify Web API.
///
/// Fetches the artist object for the given Spotify ID and returns the JSON
/// body as-is.
///
/// # Arguments
///
/// * `id` - Spotify ID of the artist to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The upstream artist object, unmodified
/// - `Err(reqwest::Error)` - Network error or non-2xx upstream status
///
/// # Example
///
/// ```
/// let artist = get_artist("0TnOYISbd1XYRBk9myaseg", &token).await?;
/// println!("Artist name: {}", artist["name"]);
/// ```
pub async fn get_artist(id: &str, token: &str) -> Result<Value, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config::spotify_apiurl(),
        id = id
    );

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Value>().await
}
