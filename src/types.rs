use serde::{Deserialize, Serialize};

/// Token material returned by Spotify's client-credentials exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Reduced token body served by (and read back from) `/access-token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyToken {
    pub access_token: String,
}
