//! Tests for the Spotify client layer.
//!
//! These tests use mock servers to verify request shapes and response
//! handling without a real Spotify connection.

use reqwest::Client;
use serde_json::json;
use sporec::SporecError;
use sporec::config::Credentials;
use sporec::spotify::{Catalog, auth};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_credentials() -> Credentials {
    Credentials::new("client-id", "client-secret")
}

// =============================================================================
// Authentication Tests
// =============================================================================

mod authentication {
    use super::*;

    #[test]
    fn test_basic_authorization_header() {
        assert_eq!(
            auth::basic_authorization(&test_credentials()),
            "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ="
        );
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let debug = format!("{:?}", test_credentials());
        assert!(debug.contains("client-id"));
        assert!(!debug.contains("client-secret"));
    }

    #[tokio::test]
    async fn test_request_token_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .and(header(
                "authorization",
                "Basic Y2xpZW50LWlkOmNsaWVudC1zZWNyZXQ=",
            ))
            .and(body_string_contains("grant_type=client_credentials"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "BQC-test-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token_url = format!("{}/api/token", server.uri());
        let token = auth::request_token(&Client::new(), &token_url, &test_credentials())
            .await
            .unwrap();

        assert_eq!(token.access_token, "BQC-test-token");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
    }

    #[tokio::test]
    async fn test_request_token_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_client" })),
            )
            .mount(&server)
            .await;

        let token_url = format!("{}/api/token", server.uri());
        let result = auth::request_token(&Client::new(), &token_url, &test_credentials()).await;

        match result {
            Err(SporecError::Authentication { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("invalid_client"));
            }
            other => panic!("Expected Authentication error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_request_token_non_200_success_status_is_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/token"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let token_url = format!("{}/api/token", server.uri());
        let result = auth::request_token(&Client::new(), &token_url, &test_credentials()).await;

        assert!(matches!(
            result,
            Err(SporecError::Authentication { status: 204, .. })
        ));
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog {
    use super::*;

    fn catalog_for(server: &MockServer) -> Catalog {
        Catalog::new(Client::new(), format!("{}/", server.uri()), "test-token")
    }

    #[tokio::test]
    async fn test_api_url_trailing_slash_is_trimmed() {
        let server = MockServer::start().await;
        let catalog = catalog_for(&server);
        assert_eq!(catalog.api_url(), server.uri());
    }

    #[tokio::test]
    async fn test_playlist_tracks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlists/pl1/tracks"))
            .and(query_param("limit", "100"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "track": {
                            "id": "t1",
                            "name": "Song One",
                            "artists": [{ "name": "Artist A" }, { "name": "Artist B" }],
                            "album": { "id": "al1", "name": "Album One" }
                        }
                    },
                    { "track": null }
                ],
                "next": null
            })))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        let page = catalog.playlist_tracks("pl1").await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.next.is_none());
        let track = page.items[0].track.as_ref().unwrap();
        assert_eq!(track.id.as_deref(), Some("t1"));
        assert_eq!(track.artists.len(), 2);
        assert_eq!(track.album.id.as_deref(), Some("al1"));
        assert!(page.items[1].track.is_none());
    }

    #[tokio::test]
    async fn test_playlist_tracks_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/playlists/unknown/tracks"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        let err = catalog.playlist_tracks("unknown").await.unwrap_err();

        assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    }

    #[tokio::test]
    async fn test_audio_features() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/audio-features"))
            .and(query_param("ids", "t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "audio_features": [{
                    "id": "t1",
                    "duration_ms": 175238,
                    "danceability": 0.561,
                    "energy": 0.965,
                    "key": 7,
                    "loudness": -3.673,
                    "mode": 0,
                    "speechiness": 0.0343,
                    "acousticness": 0.00383,
                    "instrumentalness": 0.00000707,
                    "liveness": 0.371,
                    "valence": 0.304,
                    "tempo": 128.04
                }]
            })))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        let features = catalog.audio_features("t1").await.unwrap().unwrap();

        assert_eq!(features.duration_ms, Some(175238));
        assert_eq!(features.key, Some(7.0));
        assert_eq!(features.mode, Some(0.0));
        assert_eq!(features.tempo, Some(128.04));
    }

    #[tokio::test]
    async fn test_audio_features_null() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/audio-features"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "audio_features": [null] })),
            )
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);
        assert!(catalog.audio_features("t1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_album_and_track() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/albums/al1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "al1",
                "name": "Album One",
                "release_date": "2022-08-26",
                "release_date_precision": "day"
            })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/tracks/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "t1",
                "name": "Song One",
                "popularity": 87
            })))
            .mount(&server)
            .await;

        let catalog = catalog_for(&server);

        let album = catalog.album("al1").await.unwrap();
        assert_eq!(album.release_date.as_deref(), Some("2022-08-26"));

        let track = catalog.track("t1").await.unwrap();
        assert_eq!(track.popularity, Some(87));
    }
}
