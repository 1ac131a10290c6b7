use std::fmt;

use serde::Deserialize;
use serde_json::Value;
use tabled::Tabled;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Bearer token for the lifetime of one run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistRef {
    pub name: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    pub name: String,
    pub duration_ms: u64,
    pub artists: Vec<ArtistRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInfo {
    pub id: String,
    pub name: String,
    pub followers: u64,
}

/// Result of reading one playlist item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemOutcome {
    Track(TrackInfo),
    /// `track` missing or null, e.g. a removed or local file.
    Skipped,
    /// `track` present but unreadable.
    Dropped(String),
}

/// Everything pagination produced, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedTracks {
    pub tracks: Vec<TrackInfo>,
    pub pages: usize,
    pub skipped: usize,
    pub dropped: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// One page of `GET /playlists/{id}/tracks`. Items stay untyped so that a
/// single bad item cannot fail the whole page.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<Value>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistResponse {
    pub name: String,
    pub followers: Followers,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub duration_ms: u64,
    pub length: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub name: String,
    pub followers: u64,
}
