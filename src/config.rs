//! Configuration management for the Spotify recommendation CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Client credentials are validated once, up front,
//! by [`Credentials::from_env`] instead of being looked up ad hoc.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::{Res, SporecError};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SEED_TRACK: &str = "I'm Good (Blue)";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from `sporec/.env` inside the platform-specific
/// local data directory. A missing `.env` file is not an error: the variables
/// may just as well come from the process environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporec/.env`
/// - macOS: `~/Library/Application Support/sporec/.env`
/// - Windows: `%LOCALAPPDATA%/sporec/.env`
///
/// # Errors
///
/// Returns [`SporecError::Config`] if the directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Res<()> {
    let path = env_file_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| SporecError::Config(e.to_string()))?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            SporecError::Config(format!("cannot load {}: {}", path.display(), e))
        })?;
    }

    Ok(())
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporec/.env");
    path
}

/// Spotify application credentials used for the client-credentials grant.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET`.
    ///
    /// # Errors
    ///
    /// Returns [`SporecError::Config`] naming the first variable that is unset
    /// or blank.
    pub fn from_env() -> Res<Self> {
        Ok(Self {
            client_id: required("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: required("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
        })
    }
}

// The secret must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

fn required(key: &str) -> Res<String> {
    match optional(key) {
        Some(value) => Ok(value),
        None => Err(SporecError::Config(format!("{} must be set", key))),
    }
}

fn optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    optional("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    optional("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the playlist analysed when no `--playlist` flag is given.
pub fn default_playlist_id() -> Option<String> {
    optional("SPOREC_PLAYLIST_ID")
}

/// Returns the seed track used when no `--song` flag is given.
pub fn default_seed_track() -> String {
    optional("SPOREC_SEED_TRACK").unwrap_or_else(|| DEFAULT_SEED_TRACK.to_string())
}
