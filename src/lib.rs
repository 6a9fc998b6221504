//! Spotify Track Recommendation Library
//!
//! This library fetches the tracks of a Spotify playlist together with their
//! audio features, scales the numeric features to a common range and ranks the
//! playlist's tracks by cosine similarity to a seed track. A hybrid ranking
//! re-orders the most similar tracks by popularity.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `dataset` - Assembly of per-track records from catalog lookups
//! - `error` - Error taxonomy shared by all modules
//! - `features` - Feature matrix extraction and min-max scaling
//! - `recommend` - Similarity and hybrid recommendation ranking
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use sporec::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> sporec::Res<()> {
//!     config::load_env().await?;
//!     // Use CLI functions...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod recommend;
pub mod spotify;
pub mod types;

pub use error::SporecError;

/// A convenient Result type alias for operations that may fail.
///
/// All fallible operations in the crate report a [`SporecError`], so callers
/// can match on the failure kind (authentication, missing seed, ...) instead
/// of inspecting strings.
///
/// # Example
///
/// ```
/// use sporec::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, SporecError>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Fetching playlist {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Dataset built with {} tracks", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as a failed per-track lookup or a seed
/// track that is not part of the playlist.
///
/// # Example
///
/// ```
/// warning!("Audio features unavailable for track {}", track_id);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
