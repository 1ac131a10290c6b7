//! Configuration management for the playlist report.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The playlist itself is fixed; only the Spotify
//! credentials and, optionally, the API endpoints come from the environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoints only)

use std::{env, path::PathBuf};

use reqwest::Url;

use crate::{error::ConfigError, types::Credentials};

/// Environment variable holding the Spotify application client ID.
pub const CLIENT_ID_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_ID";

/// Environment variable holding the Spotify application client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_API_AUTH_CLIENT_SECRET";

pub const API_URL_VAR: &str = "SPOTIFY_API_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_API_TOKEN_URL";

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// The playlist every run reports on.
pub const PLAYLIST_ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

/// Items requested per playlist page. 100 is the maximum the API accepts.
pub const PAGE_SIZE: u32 = 100;

/// Number of tracks kept after sorting by duration.
pub const TOP_TRACKS: usize = 10;

/// Artist id the API hands out for artists without a catalogue entry.
pub const NULL_ARTIST_ID: &str = "null";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `longplay/.env`. Variables already present in the
/// process environment are never overwritten.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/longplay/.env`
/// - macOS: `~/Library/Application Support/longplay/.env`
/// - Windows: `%LOCALAPPDATA%/longplay/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
///
/// A missing `.env` file is not an error.
pub async fn load_env() -> Result<(), ConfigError> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| ConfigError::Dotenv(e.to_string()))?;
    }
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("longplay/.env");
    path
}

/// Reads the Spotify client credentials from the process environment.
///
/// Both `SPOTIFY_API_AUTH_CLIENT_ID` and `SPOTIFY_API_AUTH_CLIENT_SECRET` must
/// be set. An empty value counts as missing.
///
/// # Example
///
/// ```
/// let credentials = config::load_credentials()?;
/// let token = client.acquire_token(&credentials).await?;
/// ```
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    credentials_from(|name| env::var(name).ok())
}

/// Builds [`Credentials`] from an arbitrary variable lookup.
pub fn credentials_from<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let present = |name: &str| lookup(name).filter(|value| !value.is_empty());

    match (present(CLIENT_ID_VAR), present(CLIENT_SECRET_VAR)) {
        (Some(client_id), Some(client_secret)) => Ok(Credentials {
            client_id,
            client_secret,
        }),
        _ => Err(ConfigError::MissingCredentials),
    }
}

/// Base URLs of the two Spotify services a run talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Web API base, e.g. `https://api.spotify.com/v1`.
    pub api_url: String,
    /// OAuth token endpoint, e.g. `https://accounts.spotify.com/api/token`.
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Trailing slashes are stripped from both URLs.
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        let trim = |url: String| url.trim_end_matches('/').to_string();
        Self {
            api_url: trim(api_url.into()),
            token_url: trim(token_url.into()),
        }
    }

    /// Resolves endpoints from `SPOTIFY_API_URL` and `SPOTIFY_API_TOKEN_URL`,
    /// falling back to the public Spotify services.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let resolve = |name: &str, fallback: String| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        Self::new(
            resolve(API_URL_VAR, defaults.api_url),
            resolve(TOKEN_URL_VAR, defaults.token_url),
        )
    }

    /// First page of a playlist's items.
    pub fn playlist_tracks_url(&self, playlist_id: &str) -> String {
        format!(
            "{uri}/playlists/{id}/tracks?limit={limit}",
            uri = self.api_url,
            id = playlist_id,
            limit = PAGE_SIZE
        )
    }

    /// `/artists/{id}` with the id percent-encoded as one path segment.
    pub fn artist_url(&self, artist_id: &str) -> String {
        match Url::parse(&self.api_url) {
            Ok(mut url) => {
                if let Ok(mut segments) = url.path_segments_mut() {
                    segments.pop_if_empty().push("artists").push(artist_id);
                }
                url.to_string()
            }
            Err(_) => format!("{uri}/artists/{id}", uri = self.api_url, id = artist_id),
        }
    }
}
