use log::debug;

use crate::{
    error::FetchError,
    report::ArtistSource,
    types::{AccessToken, ArtistInfo, ArtistResponse},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves name and follower count of one artist.
    ///
    /// Issues a single authenticated `GET /artists/{id}`.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Status`] - non-success status, with the response body
    /// - [`FetchError::Transport`] - network failure
    /// - [`FetchError::MalformedArtist`] - body without a string `name` or an
    ///   integer `followers.total`, naming the artist id
    ///
    /// # Example
    ///
    /// ```
    /// let artist = client.fetch_artist("4NHQUGzhtTLFvgF5SZesLK", &token).await?;
    /// println!("{} has {} followers", artist.name, artist.followers);
    /// ```
    pub async fn fetch_artist(
        &self,
        artist_id: &str,
        token: &AccessToken,
    ) -> Result<ArtistInfo, FetchError> {
        let url = self.endpoints.artist_url(artist_id);
        debug!("GET {}", url);

        let body = self.get_authorized(&url, token).await?;
        let artist: ArtistResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::MalformedArtist {
                artist_id: artist_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(ArtistInfo {
            id: artist_id.to_string(),
            name: artist.name,
            followers: artist.followers.total,
        })
    }
}

/// A [`SpotifyClient`] bound to the run's token, usable as an [`ArtistSource`].
pub struct AuthorizedArtists<'a> {
    client: &'a SpotifyClient,
    token: &'a AccessToken,
}

impl<'a> AuthorizedArtists<'a> {
    pub fn new(client: &'a SpotifyClient, token: &'a AccessToken) -> Self {
        Self { client, token }
    }
}

impl ArtistSource for AuthorizedArtists<'_> {
    async fn fetch_artist(&self, artist_id: &str) -> Result<ArtistInfo, FetchError> {
        self.client.fetch_artist(artist_id, self.token).await
    }
}
