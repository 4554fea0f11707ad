//! End-to-end tests over the HTTP transport
//!
//! Runs the client against a mock Last.fm server and checks what arrives on
//! the wire as well as how replies are surfaced.

mod common;

use assert_matches::assert_matches;
use common::{http_client, API_SECRET};
use lastfm_client::{signer, AlbumLookup, ApiKeyStatus, ApiSecret, LastfmError};
use lastfm_test_utils::{fixtures, MockLastfmServer};

#[test_log::test(tokio::test)]
async fn test_handshake_then_session_call() {
    let server = MockLastfmServer::start().await;
    server
        .mock_method("auth.getToken", fixtures::token("T0K3N"))
        .await;
    server
        .mock_method("auth.getSession", fixtures::session("rj", "NEWKEY"))
        .await;
    server.mock_method("track.love", fixtures::empty()).await;

    let mut client = http_client(&server.url(), None);

    let token = client.auth().get_token().await.unwrap();
    assert_eq!(token.token, "T0K3N");

    let session = client.auth().get_session(&token.token).await.unwrap();
    assert_eq!(session.name, "rj");
    client.set_session_key(session.key);

    client.track().love("Muse", "Bliss").await.unwrap();

    let queries = server.received_queries().await;
    assert_eq!(queries.len(), 3);

    let love = &queries[2];
    assert_eq!(love["method"], "track.love");
    assert_eq!(love["sk"], "NEWKEY");
    assert_eq!(love["artist"], "Muse");

    // The server can recompute the signature from the decoded pairs
    let pairs = love.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    assert!(signer::verify(pairs, &ApiSecret::new(API_SECRET)));
}

#[test_log::test(tokio::test)]
async fn test_get_session_signature_on_the_wire() {
    let server = MockLastfmServer::start().await;
    server
        .mock_method("auth.getSession", fixtures::session("rj", "NEWKEY"))
        .await;

    let client = http_client(&server.url(), None);
    client.auth().get_session("T0K3N").await.unwrap();

    let queries = server.received_queries().await;
    assert_eq!(queries[0]["api_sig"], "eb01d0ea68e62d364db39801f58332f1");
    assert!(!queries[0].contains_key("sk"));
}

#[tokio::test]
async fn test_album_info_round_trip() {
    let server = MockLastfmServer::start().await;
    server
        .mock_method("album.getInfo", fixtures::album_info("Muse", "Absolution"))
        .await;

    let client = http_client(&server.url(), None);
    let body = client
        .album()
        .get_info(&AlbumLookup::by_name("Muse", "Absolution"), None)
        .await
        .unwrap();

    assert_eq!(body["album"]["name"], "Absolution");

    let queries = server.received_queries().await;
    assert_eq!(queries[0]["artist"], "Muse");
    assert_eq!(queries[0]["lang"], "en");
    assert!(!queries[0].contains_key("api_sig"));
}

#[tokio::test]
async fn test_error_envelope_with_4xx_status() {
    let server = MockLastfmServer::start().await;
    server.mock_error(6, "Album not found").await;

    let client = http_client(&server.url(), None);
    let result = client
        .album()
        .get_info(&AlbumLookup::by_name("Muse", "Nope"), None)
        .await;

    assert_matches!(
        result,
        Err(LastfmError::Api { code: Some(6), message }) if message == "Album not found"
    );
}

#[tokio::test]
async fn test_invalid_method_envelope() {
    let server = MockLastfmServer::start().await;
    server.mock_error(3, "Invalid Method - No method with that name").await;

    let client = http_client(&server.url(), None);
    let result = client.chart().get_top_tags(Default::default()).await;
    assert_matches!(result, Err(LastfmError::InvalidMethod));
}

#[tokio::test]
async fn test_rate_limited_without_retries() {
    let server = MockLastfmServer::start().await;
    server.mock_rate_limited().await;

    let client = http_client(&server.url(), None);
    let result = client.tag().get_top_tags().await;

    assert_matches!(result, Err(LastfmError::RateLimited));
    assert_eq!(server.request_count().await, 1);
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let server = MockLastfmServer::start().await;
    server.mock_server_error().await;

    let client = http_client(&server.url(), None);
    let result = client.tag().get_top_tags().await;

    assert_matches!(result, Err(LastfmError::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn test_auth_required_sends_nothing() {
    let server = MockLastfmServer::start().await;
    server.mock_method("track.love", fixtures::empty()).await;

    let client = http_client(&server.url(), None);
    let result = client.track().love("Muse", "Bliss").await;

    assert_matches!(result, Err(LastfmError::AuthRequired));
    assert_eq!(server.request_count().await, 0);
}

#[tokio::test]
async fn test_validate_api_key() {
    let server = MockLastfmServer::start().await;
    server
        .mock_method("chart.getTopTags", fixtures::top_tags(&["rock", "indie"]))
        .await;
    let client = http_client(&server.url(), None);
    assert_eq!(client.validate_api_key().await, ApiKeyStatus::Valid);

    let server = MockLastfmServer::start().await;
    server.mock_error(10, "Invalid API key").await;
    let client = http_client(&server.url(), None);
    assert_eq!(client.validate_api_key().await, ApiKeyStatus::Invalid);
}
