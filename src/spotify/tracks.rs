use log::debug;
use serde_json::Value;

use crate::{
    config::NULL_ARTIST_ID,
    error::FetchError,
    types::{AccessToken, ArtistRef, FetchedTracks, ItemOutcome, PlaylistTracksPage, TrackInfo},
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Retrieves every track of a playlist by walking its `next` links.
    ///
    /// Starts at `/playlists/{id}/tracks?limit=100` and issues one authenticated
    /// `GET` per page until a page has no `next` link. Tracks are returned in
    /// traversal order.
    ///
    /// # Item Handling
    ///
    /// - Items without a `track` (or with `track: null`) are skipped
    /// - Items whose `track` lacks a readable `name`, `duration_ms` or
    ///   `artists` are dropped
    ///
    /// Neither case fails the page; both are counted in the result.
    ///
    /// # Errors
    ///
    /// Any page answering with a non-success status, failing in transport or
    /// carrying a body that is not a page object aborts the whole fetch. No
    /// partial result is returned. With `max_pages` set, needing more pages
    /// than that fails with [`FetchError::PageLimit`].
    pub async fn fetch_all_tracks(
        &self,
        playlist_id: &str,
        token: &AccessToken,
        max_pages: Option<usize>,
    ) -> Result<FetchedTracks, FetchError> {
        self.fetch_all_tracks_with(playlist_id, token, max_pages, |_| {})
            .await
    }

    /// Same as [`fetch_all_tracks`](Self::fetch_all_tracks), calling
    /// `on_page` after every page with the running totals.
    pub async fn fetch_all_tracks_with<F>(
        &self,
        playlist_id: &str,
        token: &AccessToken,
        max_pages: Option<usize>,
        mut on_page: F,
    ) -> Result<FetchedTracks, FetchError>
    where
        F: FnMut(&FetchedTracks),
    {
        let mut fetched = FetchedTracks::default();
        let mut next_url = Some(self.endpoints.playlist_tracks_url(playlist_id));

        while let Some(url) = next_url {
            if let Some(limit) = max_pages {
                if fetched.pages >= limit {
                    return Err(FetchError::PageLimit(limit));
                }
            }

            let page = self.fetch_tracks_page(&url, token).await?;
            fetched.pages += 1;

            for item in &page.items {
                match parse_item(item) {
                    ItemOutcome::Track(track) => fetched.tracks.push(track),
                    ItemOutcome::Skipped => fetched.skipped += 1,
                    ItemOutcome::Dropped(reason) => {
                        debug!("Dropping playlist item on page {}: {}", fetched.pages, reason);
                        fetched.dropped += 1;
                    }
                }
            }

            on_page(&fetched);
            next_url = page.next;
        }

        debug!(
            "Fetched {} tracks in {} pages ({} skipped, {} dropped)",
            fetched.tracks.len(),
            fetched.pages,
            fetched.skipped,
            fetched.dropped
        );
        Ok(fetched)
    }

    /// Fetches and decodes a single page. `url` is used verbatim, so it can be
    /// a `next` link handed out by the server.
    pub async fn fetch_tracks_page(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> Result<PlaylistTracksPage, FetchError> {
        debug!("GET {}", url);
        let body = self.get_authorized(url, token).await?;

        serde_json::from_str::<PlaylistTracksPage>(&body).map_err(|e| FetchError::MalformedPage {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// Issues one authenticated `GET` and returns the body of a 2xx response.
    pub(crate) async fn get_authorized(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> Result<String, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    debug!("Cannot read error body from {}: {}", url, e);
                    String::new()
                }
            };
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(transport)
    }
}

/// Classifies one element of a page's `items` array.
pub fn parse_item(item: &Value) -> ItemOutcome {
    match item.get("track") {
        None | Some(Value::Null) => ItemOutcome::Skipped,
        Some(track) => match parse_track(track) {
            Ok(track) => ItemOutcome::Track(track),
            Err(reason) => ItemOutcome::Dropped(reason),
        },
    }
}

pub fn parse_track(track: &Value) -> Result<TrackInfo, String> {
    let name = track
        .get("name")
        .and_then(Value::as_str)
        .ok_or("track has no string `name`")?;

    let duration_ms = track
        .get("duration_ms")
        .and_then(Value::as_u64)
        .ok_or_else(|| format!("track `{name}` has no non-negative integer `duration_ms`"))?;

    let artists = track
        .get("artists")
        .and_then(Value::as_array)
        .ok_or_else(|| format!("track `{name}` has no `artists` array"))?
        .iter()
        .map(parse_artist_ref)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("track `{name}`: {e}"))?;

    Ok(TrackInfo {
        name: name.to_string(),
        duration_ms,
        artists,
    })
}

/// Reads `{name, id}`. A JSON `null` id becomes the literal `"null"` id, which
/// the report later refuses to look up.
fn parse_artist_ref(artist: &Value) -> Result<ArtistRef, String> {
    let name = artist
        .get("name")
        .and_then(Value::as_str)
        .ok_or("artist has no string `name`")?;

    let id = match artist.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) => NULL_ARTIST_ID.to_string(),
        _ => return Err(format!("artist `{name}` has no `id`")),
    };

    Ok(ArtistRef {
        name: name.to_string(),
        id,
    })
}
