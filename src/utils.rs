use std::collections::HashSet;

use crate::{
    config::NULL_ARTIST_ID,
    types::{ArtistInfo, TrackInfo},
};

/// The `n` longest tracks, longest first. Ties keep playlist order.
pub fn top_tracks_by_duration(tracks: &[TrackInfo], n: usize) -> Vec<TrackInfo> {
    let mut sorted = tracks.to_vec();
    sort_tracks_by_duration(&mut sorted);
    sorted.truncate(n);
    sorted
}

pub fn sort_tracks_by_duration(tracks: &mut [TrackInfo]) {
    // sort_by is stable
    tracks.sort_by(|a, b| b.duration_ms.cmp(&a.duration_ms));
}

/// Artist ids referenced by `tracks` in first-seen order, without duplicates
/// and without the `"null"` sentinel.
pub fn unique_artist_ids(tracks: &[TrackInfo]) -> Vec<String> {
    let mut ids: Vec<String> = tracks
        .iter()
        .flat_map(|track| track.artists.iter())
        .map(|artist| artist.id.clone())
        .filter(|id| id != NULL_ARTIST_ID)
        .collect();

    remove_duplicate_ids(&mut ids);
    ids
}

pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen_ids = HashSet::new();
    ids.retain(|id| seen_ids.insert(id.clone()));
}

pub fn sort_artists_by_followers(artists: &mut [ArtistInfo]) {
    artists.sort_by(|a, b| b.followers.cmp(&a.followers));
}

/// Formats milliseconds as `m:ss`, e.g. `354000` as `5:54`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}
