//! Longest Tracks Report Library
//!
//! This library fetches a fixed Spotify playlist, picks its ten longest tracks
//! and ranks the artists credited on them by follower count. It includes
//! modules for API communication, aggregation, configuration management and
//! the CLI commands built on top of them.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error types for configuration, authentication and fetching
//! - `report` - Aggregation of tracks and artists into the final report
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Sorting and deduplication helpers
//!
//! # Example
//!
//! ```
//! use longplay::{config, report, spotify::{SpotifyClient, artists::AuthorizedArtists}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let credentials = config::load_credentials()?;
//!     let client = SpotifyClient::new(config::Endpoints::from_env());
//!     let token = client.acquire_token(&credentials).await?;
//!     let fetched = client.fetch_all_tracks(config::PLAYLIST_ID, &token, None).await?;
//!     let report = report::build_report(&fetched.tracks, &AuthorizedArtists::new(&client, &token)).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for report headings.
///
/// # Example
///
/// ```
/// info!("Top {} longest tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program with exit code 1.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message. It should only be used for fatal errors where
/// recovery is not possible.
///
/// # Example
///
/// ```
/// error!("Failed to acquire access token: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark to stderr.
///
/// Used for recoverable issues, such as a single artist that could not be
/// looked up, that don't require program termination.
///
/// # Example
///
/// ```
/// warning!("Failed to fetch artist {}: {}", id, e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
