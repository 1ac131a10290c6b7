//! Aggregation of fetched tracks into the two reports.
//!
//! The report keeps the ten longest tracks, looks up every artist credited on
//! them and orders those artists by follower count. Artist lookups go through
//! [`ArtistSource`] so the aggregation can run against anything that resolves
//! an id, not only the live API.

use std::future::Future;

use log::debug;

use crate::{
    config::TOP_TRACKS,
    error::{ArtistWarning, FetchError},
    types::{ArtistInfo, TrackInfo},
    utils,
};

/// Resolves an artist id to its [`ArtistInfo`].
pub trait ArtistSource {
    fn fetch_artist(
        &self,
        artist_id: &str,
    ) -> impl Future<Output = Result<ArtistInfo, FetchError>>;
}

#[derive(Debug, Default)]
pub struct Report {
    /// At most [`TOP_TRACKS`] tracks, longest first.
    pub top_tracks: Vec<TrackInfo>,
    /// Successfully fetched artists, most followed first.
    pub artists: Vec<ArtistInfo>,
    /// Lookups that failed, in lookup order.
    pub warnings: Vec<ArtistWarning>,
}

impl Report {
    /// `(name, duration_ms)` pairs in report order.
    pub fn track_lines(&self) -> Vec<(&str, u64)> {
        self.top_tracks
            .iter()
            .map(|track| (track.name.as_str(), track.duration_ms))
            .collect()
    }

    /// `(name, followers)` pairs in report order.
    pub fn artist_lines(&self) -> Vec<(&str, u64)> {
        self.artists
            .iter()
            .map(|artist| (artist.name.as_str(), artist.followers))
            .collect()
    }
}

/// Builds the report from every track of the playlist.
///
/// 1. Sorts by duration (stable, descending) and keeps the first ten.
/// 2. Collects their artist ids in first-seen order, minus the `"null"` id.
/// 3. Fetches each artist once, one after another. Failures become
///    warnings and never stop the remaining lookups.
/// 4. Sorts the fetched artists by followers (stable, descending).
pub async fn build_report<S>(tracks: &[TrackInfo], source: &S) -> Report
where
    S: ArtistSource,
{
    let top_tracks = utils::top_tracks_by_duration(tracks, TOP_TRACKS);
    let artist_ids = utils::unique_artist_ids(&top_tracks);
    debug!(
        "Looking up {} artists for {} tracks",
        artist_ids.len(),
        top_tracks.len()
    );

    let (mut artists, warnings) = fetch_artists(&artist_ids, source).await;
    utils::sort_artists_by_followers(&mut artists);

    Report {
        top_tracks,
        artists,
        warnings,
    }
}

/// Looks up every id and partitions the outcomes into artists and warnings.
pub async fn fetch_artists<S>(
    artist_ids: &[String],
    source: &S,
) -> (Vec<ArtistInfo>, Vec<ArtistWarning>)
where
    S: ArtistSource,
{
    let mut artists = Vec::with_capacity(artist_ids.len());
    let mut warnings = Vec::new();

    for artist_id in artist_ids {
        match source.fetch_artist(artist_id).await {
            Ok(artist) => artists.push(artist),
            Err(error) => warnings.push(ArtistWarning {
                artist_id: artist_id.clone(),
                error,
            }),
        }
    }

    (artists, warnings)
}
