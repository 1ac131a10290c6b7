//! Error taxonomy for a report run.
//!
//! [`ConfigError`] and [`AuthError`] always end the run. [`FetchError`] ends the
//! run when it comes out of playlist pagination, but is downgraded to an
//! [`ArtistWarning`] when a single artist lookup fails.

use thiserror::Error;

use crate::config::{CLIENT_ID_VAR, CLIENT_SECRET_VAR};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing Spotify credentials. Both {} and {} must be set and non-empty",
        CLIENT_ID_VAR,
        CLIENT_SECRET_VAR
    )]
    MissingCredentials,

    #[error("Cannot prepare configuration directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read .env file: {0}")]
    Dotenv(String),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token request rejected with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Token response could not be parsed: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Page {url} could not be parsed: {reason}")]
    MalformedPage { url: String, reason: String },

    #[error("Artist {artist_id} could not be parsed: {reason}")]
    MalformedArtist { artist_id: String, reason: String },

    #[error("Pagination exceeded the limit of {0} pages")]
    PageLimit(usize),
}

/// A failed artist lookup that was kept out of the report.
#[derive(Error, Debug)]
#[error("Failed to fetch artist {artist_id}: {error}")]
pub struct ArtistWarning {
    pub artist_id: String,
    #[source]
    pub error: FetchError,
}
