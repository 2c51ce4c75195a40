use std::{
    collections::HashMap,
    env,
    net::SocketAddr,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

// The proxy reads its configuration from process-global environment
// variables, so tests that reconfigure the upstream must not interleave.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn set_proxy_env(proxy: SocketAddr, upstream: SocketAddr) {
    unsafe {
        env::set_var("SPOTIFY_CLIENT_ID", "test-client-id");
        env::set_var("SPOTIFY_CLIENT_SECRET", "test-client-secret");
        env::set_var("SPOTIFY_API_URL", format!("http://{}/v1", upstream));
        env::set_var(
            "SPOTIFY_API_TOKEN_URL",
            format!("http://{}/api/token", upstream),
        );
        env::set_var("BASE_URL", format!("http://{}", proxy));
    }
}

async fn spawn_server(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

// Stub upstream that mimics Spotify: the token endpoint hands out a distinct
// token on every exchange, resource endpoints return canned objects, and the
// search endpoint echoes the query parameters it received.
fn stub_upstream() -> Router {
    let exchanges = Arc::new(AtomicUsize::new(0));

    Router::new()
        .route(
            "/api/token",
            post(move || {
                let n = exchanges.fetch_add(1, Ordering::SeqCst) + 1;
                async move {
                    Json(json!({
                        "access_token": format!("stub-token-{}", n),
                        "token_type": "Bearer",
                        "expires_in": 3600
                    }))
                }
            }),
        )
        .route(
            "/v1/tracks/{id}",
            get(|Path(id): Path<String>| async move {
                Json(json!({ "id": id, "type": "track", "name": "Stub Track" }))
            }),
        )
        .route(
            "/v1/albums/{id}",
            get(|Path(id): Path<String>| async move {
                Json(json!({ "id": id, "type": "album", "name": "Stub Album" }))
            }),
        )
        .route(
            "/v1/artists/{id}",
            get(|Path(id): Path<String>| async move {
                Json(json!({ "id": id, "type": "artist", "name": "Stub Artist" }))
            }),
        )
        .route(
            "/v1/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                Json(json!({ "received": params }))
            }),
        )
}

async fn fail() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

// Upstream where the token exchange works but every data endpoint fails.
fn broken_data_upstream() -> Router {
    Router::new()
        .route(
            "/api/token",
            post(|| async {
                Json(json!({
                    "access_token": "stub-token",
                    "token_type": "Bearer",
                    "expires_in": 3600
                }))
            }),
        )
        .route("/v1/tracks/{id}", get(fail))
        .route("/v1/albums/{id}", get(fail))
        .route("/v1/artists/{id}", get(fail))
        .route("/v1/search", get(fail))
}

// Upstream where the token exchange itself fails.
fn broken_token_upstream() -> Router {
    Router::new().route("/api/token", post(fail))
}

#[tokio::test]
async fn test_health_reports_ok() {
    let _guard = lock_env();
    let proxy = spawn_server(spotiproxy::server::router()).await;

    let body: Value = reqwest::get(format!("http://{}/health", proxy))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "spotiproxy");
}

#[tokio::test]
async fn test_access_token_is_fresh_on_every_call() {
    let _guard = lock_env();
    let upstream = spawn_server(stub_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let client = reqwest::Client::new();
    let url = format!("http://{}/access-token", proxy);

    let first: Value = client.post(&url).send().await.unwrap().json().await.unwrap();
    let second: Value = client.post(&url).send().await.unwrap().json().await.unwrap();

    // Each call performs a full exchange, so the stub hands out new tokens
    assert_eq!(first["access_token"], "stub-token-1");
    assert_eq!(second["access_token"], "stub-token-2");

    // The response carries only the token string
    assert_eq!(first.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn test_id_routes_relay_upstream_body_verbatim() {
    let _guard = lock_env();
    let upstream = spawn_server(stub_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let cases = [
        ("get-track", "track", "Stub Track"),
        ("get-album", "album", "Stub Album"),
        ("get-artist", "artist", "Stub Artist"),
    ];

    for (route, kind, name) in cases {
        let response = reqwest::get(format!("http://{}/{}/abc123", proxy, route))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "id": "abc123", "type": kind, "name": name }));
    }
}

#[tokio::test]
async fn test_search_routes_pass_query_through() {
    let _guard = lock_env();
    let upstream = spawn_server(stub_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let client = reqwest::Client::new();
    let cases = [
        ("get-track", "track"),
        ("get-album", "album"),
        ("get-artist", "artist"),
    ];

    for (route, kind) in cases {
        let body: Value = client
            .get(format!("http://{}/{}", proxy, route))
            .query(&[("q", "daft punk")])
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        // The term survives percent-encoding on the way upstream
        assert_eq!(body["received"]["q"], "daft punk");
        assert_eq!(body["received"]["type"], kind);
        assert_eq!(body["received"]["limit"], "1");
    }
}

#[tokio::test]
async fn test_missing_query_is_forwarded_as_empty_term() {
    let _guard = lock_env();
    let upstream = spawn_server(stub_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let response = reqwest::get(format!("http://{}/get-track", proxy))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    // No local validation: the upstream saw an empty q
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["received"]["q"], "");
    assert_eq!(body["received"]["type"], "track");
}

#[tokio::test]
async fn test_upstream_failure_maps_to_generic_500() {
    let _guard = lock_env();
    let upstream = spawn_server(broken_data_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let client = reqwest::Client::new();
    let cases = [
        ("get-track/abc", "Failed to fetch track information"),
        ("get-album/abc", "Failed to fetch album information"),
        ("get-artist/abc", "Failed to fetch artist information"),
        ("get-track?q=x", "Failed to fetch requested track information"),
        ("get-album?q=x", "Failed to fetch requested album information"),
        ("get-artist?q=x", "Failed to fetch requested artist information"),
    ];

    for (route, message) in cases {
        let response = client
            .get(format!("http://{}/{}", proxy, route))
            .send()
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
        );

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": message }));
    }
}

#[tokio::test]
async fn test_token_exchange_failure_maps_to_500() {
    let _guard = lock_env();
    let upstream = spawn_server(broken_token_upstream()).await;
    let proxy = spawn_server(spotiproxy::server::router()).await;
    set_proxy_env(proxy, upstream);

    let client = reqwest::Client::new();

    // The token route itself reports the generic exchange failure
    let response = client
        .post(format!("http://{}/access-token", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to obtain access token" }));

    // Resource routes fail the same way since their token round trip fails
    let response = client
        .get(format!("http://{}/get-album/abc", proxy))
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Failed to fetch album information" }));
}
