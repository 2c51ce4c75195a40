use std::fmt;

use reqwest::Client;
use serde_json::Value;

use crate::config;

/// Resource type a catalog search is scoped to.
///
/// Rendered with `Display` into the value of the Spotify `type` query
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Track,
    Album,
    Artist,
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Artist => "artist",
        };
        write!(f, "{}", kind)
    }
}

/// Builds the search URL for a query and resource type.
///
/// The query term is percent-encoded and the result limit is fixed at one,
/// so the response carries at most a single match.
pub fn build_search_url(query: &str, kind: SearchKind) -> String {
    format!(
        "{uri}/search?q={query}&type={kind}&limit=1",
        uri = &config::spotify_apiurl(),
        query = urlencoding::encode(query),
        kind = kind
    )
}

/// Searches the Spotify catalog for a single resource.
///
/// Issues a search scoped to the given resource type with a fixed result
/// limit of one and returns the search response body as-is. An empty query
/// term is not rejected locally; the upstream's handling of it determines
/// the outcome.
///
/// # Arguments
///
/// * `query` - Free-text search term (may be empty)
/// * `kind` - Resource type the search is scoped to
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Value)` - The upstream search response, unmodified
/// - `Err(reqwest::Error)` - Network error or non-2xx upstream status
///
/// # Example
///
/// ```
/// let result = search("Random Access Memories", SearchKind::Album, &token).await?;
/// println!("First match: {}", result["albums"]["items"][0]["name"]);
/// ```
pub async fn search(query: &str, kind: SearchKind, token: &str) -> Result<Value, reqwest::Error> {
    let client = Client::new();
    let api_url = build_search_url(query, kind);

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Value>().await
}
