use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Retrieves a single album from the Spotify Web API.
///
/// Fetches the album object for the given Spotify ID and returns the JSON
/// body as-is, including the embedded track listing Spotify ships with the
/// album object.
///
/// # Arguments
///
/// * `id` - Spotify ID of the album to fetch
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The upstream album object, unmodified
/// - `Err(reqwest::Error)` - Network error or non-2xx upstream status
///
/// # Example
///
/// ```
/// let album = get_album("4aawyAB9vmqN3uQ7FjRGTy", &token).await?;
/// println!("Album name: {}", album["name"]);
/// ```
pub async fn get_album(id: &str, token: &str) -> Result<Value, reqwest::Error> {
    let client = Client::new();
    let api_url = format!(
        "{uri}/albums/{id}",
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
