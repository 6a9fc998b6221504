//! Error types shared across the recommendation pipeline.
//!
//! Only [`SporecError::Authentication`] is meant to abort a run. The other
//! variants are produced so callers can decide how to degrade: a missing seed
//! becomes "no results", a failed lookup becomes an absent field and a bad
//! release date becomes a popularity weight of zero.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SporecError {
    /// Token endpoint answered with something other than HTTP 200.
    #[error("Cannot obtain access token (status {status}). Check your client credentials. Response: {body}")]
    Authentication { status: u16, body: String },

    /// Seed track is not part of the dataset.
    #[error("'{0}' not found in the dataset.")]
    NotFound(String),

    /// A per-track catalog lookup failed or returned null.
    #[error("Missing data: {0}")]
    MissingData(String),

    /// A value could not be parsed, e.g. a release date.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Required configuration is absent or empty.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}
