//! # Spotify Integration Module
//!
//! This module is the HTTP client side of the report. It speaks to two Spotify
//! services and nothing else:
//!
//! ```text
//! Report Layer (cli, report)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client-credentials grant)
//!     ├── Playlist Tracks (paginated)
//!     └── Artists (single lookup)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Exchanges client credentials for a bearer token
//! - `GET /playlists/{id}/tracks` - Playlist items, followed through `next` links
//! - `GET /artists/{id}` - Artist name and follower count
//!
//! ## Error Policy
//!
//! Requests are issued once. A non-success status, a transport failure or an
//! unreadable response body is returned to the caller as an [`AuthError`] or
//! [`FetchError`]; whether that ends the run is decided by the caller.
//!
//! [`AuthError`]: crate::error::AuthError
//! [`FetchError`]: crate::error::FetchError

pub mod artists;
pub mod auth;
pub mod tracks;

use reqwest::Client;

use crate::config::Endpoints;

/// Shared HTTP client plus the endpoints it talks to.
///
/// One instance serves the whole run; the underlying connection pool is reused
/// across the token request, every playlist page and every artist lookup.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    endpoints: Endpoints,
}

impl SpotifyClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            http: Client::new(),
            endpoints,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new(Endpoints::default())
    }
}
