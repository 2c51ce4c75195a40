use spotiproxy::spotify::search::{SearchKind, build_search_url};

#[test]
fn test_search_kind_display() {
    assert_eq!(SearchKind::Track.to_string(), "track");
    assert_eq!(SearchKind::Album.to_string(), "album");
    assert_eq!(SearchKind::Artist.to_string(), "artist");
}

#[test]
fn test_build_search_url_scopes_type_and_limit() {
    let url = build_search_url("nevermind", SearchKind::Album);

    // Should target the search endpoint
    assert!(url.contains("/search?"));

    // Should scope the search to the requested resource type
    assert!(url.contains("type=album"));

    // Result limit is fixed at one
    assert!(url.ends_with("&limit=1"));
}

#[test]
fn test_build_search_url_encodes_query() {
    // Spaces must be percent-encoded
    let url = build_search_url("daft punk", SearchKind::Track);
    assert!(url.contains("q=daft%20punk"));
    assert!(!url.contains("daft punk"));

    // Reserved characters must not leak into the query string
    let url = build_search_url("AC/DC", SearchKind::Artist);
    assert!(url.contains("q=AC%2FDC"));

    let url = build_search_url("this & that", SearchKind::Track);
    assert!(url.contains("q=this%20%26%20that"));
}

#[test]
fn test_build_search_url_with_empty_query() {
    // An empty term is not rejected; it produces an empty q parameter
    let url = build_search_url("", SearchKind::Track);
    assert!(url.contains("q=&type=track"));
}

#[test]
fn test_build_search_url_defaults_to_public_api() {
    // Without an override the URL points at the public Spotify Web API
    let url = build_search_url("test", SearchKind::Track);
    assert!(url.starts_with("https://api.spotify.com/v1/search?"));
}
