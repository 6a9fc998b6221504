//! # Spotify Integration Module
//!
//! This module is the integration layer between sporec and the Spotify Web
//! API. It obtains an application token and performs the read-only catalog
//! lookups the dataset builder needs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Dataset Builder)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (OAuth 2.0 client credentials)
//!     ├── Playlist Operations (tracks of a playlist)
//!     ├── Track Operations (audio features, popularity)
//!     └── Album Operations (release date)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Exchanges client id and secret for a bearer token using the
//!   `client_credentials` grant. No user interaction and no refresh: the token
//!   lives for one run.
//! - [`playlists`] - `GET /playlists/{id}/tracks`, a single page only.
//! - [`tracks`] - `GET /audio-features?ids={id}` and `GET /tracks/{id}`.
//! - [`albums`] - `GET /albums/{id}`.
//!
//! ## Error Handling
//!
//! Catalog operations return `reqwest::Error` for transport failures and for
//! non-2xx statuses (`error_for_status`). Whether such a failure is fatal is
//! decided by the caller; the dataset builder turns enrichment failures into
//! absent values. Requests are neither retried nor rate limited.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let client = reqwest::Client::new();
//! let token = spotify::auth::request_token(&client, &token_url, &credentials).await?;
//! let catalog = spotify::Catalog::new(client, config::spotify_apiurl(), token.access_token);
//!
//! let page = catalog.playlist_tracks("37i9dQZF1DXcBWIGoYBM5M").await?;
//! ```

pub mod albums;
pub mod auth;
pub mod playlists;
pub mod tracks;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// Authenticated handle on the Spotify catalog endpoints.
///
/// Holds one `reqwest::Client` so every lookup of a run reuses the same
/// connection pool.
#[derive(Debug, Clone)]
pub struct Catalog {
    client: Client,
    api_url: String,
    token: String,
}

impl Catalog {
    pub fn new(client: Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Catalog {
            client,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, reqwest::Error> {
        let api_url = format!("{uri}{path}", uri = &self.api_url, path = path);

        self.client
            .get(&api_url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}
