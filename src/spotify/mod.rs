//! # Spotify Integration Module
//!
//! This module implements the outbound half of the proxy: authentication
//! against Spotify's accounts service and data retrieval from the Spotify
//! Web API. It handles all HTTP communication and hands opaque JSON bodies
//! back to the API layer for relaying.
//!
//! ## Architecture
//!
//! The module follows a feature-based organization where each submodule
//! handles a specific domain of Spotify API functionality:
//!
//! ```text
//! API Layer (handlers)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Track Operations (lookup by ID)
//!     ├── Album Operations (lookup by ID)
//!     ├── Artist Operations (lookup by ID)
//!     └── Catalog Search (track / album / artist, limit 1)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication Strategy
//!
//! [`auth`] implements the OAuth 2.0 client-credentials grant: the server
//! authenticates as itself with a statically configured client ID/secret
//! pair, sent as a base64-encoded basic-auth header. No user authorization
//! is involved and no token is cached; every proxied request triggers a
//! fresh exchange.
//!
//! Resource lookups do not call the exchange directly. They request the
//! token from the server's own `/access-token` endpoint over HTTP via
//! [`auth::fetch_proxy_token`], preserving the original round-trip shape of
//! the service.
//!
//! ## Error Handling Philosophy
//!
//! All functions return `Result<_, reqwest::Error>`. Non-2xx upstream
//! responses are turned into errors with `error_for_status`, so the API
//! layer sees a single "upstream call failed" condition regardless of
//! whether the cause was a network fault, bad credentials, or an upstream
//! 4xx. There is no retry logic and no rate-limit handling.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /tracks/{id}` - single track by ID
//! - `GET /albums/{id}` - single album by ID
//! - `GET /artists/{id}` - single artist by ID
//! - `GET /search` - catalog search scoped to one resource type

pub mod albums;
pub mod artists;
pub mod auth;
pub mod search;
pub mod tracks;
