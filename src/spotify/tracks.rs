use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Retrieves a single track from the Spotify Web API.
///
/// Fetches the track object for the given Spotify ID and returns the JSON
/// body as-is. The ID is not validated locally; an invalid or unknown ID
/// results in an upstream error status which is propagated as an error.
///
/// # Arguments
///
/// * `id` - Spotify ID of the track to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The upstream track object, unmodified
/// - `Err(reqwest::Error)` - Network error or non-2xx upstream status
///
/// # Example
///
/// ```
/// let track = get_track("11dFghVXANMlKmJXsNCbNl", &token).await?;
/// println!("Track name: {}", track["name"]);
/// ```
pub async fn get_track(id: &str, token: &str) -> Result<Value, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/tracks/{id}",
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
