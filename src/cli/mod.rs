//! # CLI Module
//!
//! This module provides the command-line interface layer for sporec. It wires
//! configuration, authentication, dataset assembly, feature scaling and
//! ranking together and renders the results as tables.
//!
//! ## Commands
//!
//! - [`recommend`] - Recommends tracks of a playlist similar to a seed track,
//!   either purely by audio features or re-ordered by popularity (hybrid)
//! - [`dataset`] - Prints the assembled per-track dataset of a playlist
//!
//! ## Data Flow
//!
//! ```text
//! Credentials → Token → Playlist + per-track lookups → Feature matrix → Ranking
//! ```
//!
//! Every step runs once and in order. Nothing is cached between runs.
//!
//! ## Error Handling
//!
//! Commands never panic on remote or configuration failures. A fatal failure
//! (bad credentials, unknown playlist, missing configuration) is printed once
//! as `Error: <message>` and the command returns normally. A seed track that
//! is not part of the playlist is reported as a warning and produces no table.
//!
//! ## Usage Patterns
//!
//! ```bash
//! sporec recommend --playlist 37i9dQZF1DXcBWIGoYBM5M --song "I'm Good (Blue)"
//! sporec recommend --mode content --count 10
//! sporec dataset --playlist 37i9dQZF1DXcBWIGoYBM5M
//! ```

mod dataset;
mod recommend;

use crate::SporecError;

pub use dataset::dataset;
pub use recommend::RecommendMode;
pub use recommend::{recommend, recommendation_report};

/// Line printed for a failure that ends a command.
///
/// Kept free of console decoration so scripts can match on the `Error:`
/// prefix.
pub fn fatal_message(err: &SporecError) -> String {
    format!("Error: {}", err)
}
