use longplay::types::{ArtistInfo, ArtistRef, TrackInfo};
use longplay::utils::*;

// Helper function to create a test track
fn create_test_track(name: &str, duration_ms: u64, artist_ids: &[&str]) -> TrackInfo {
    TrackInfo {
        name: name.to_string(),
        duration_ms,
        artists: artist_ids
            .iter()
            .map(|id| ArtistRef {
                name: format!("{}_name", id),
                id: id.to_string(),
            })
            .collect(),
    }
}

// Helper function to create a test artist
fn create_test_artist(id: &str, followers: u64) -> ArtistInfo {
    ArtistInfo {
        id: id.to_string(),
        name: format!("{}_name", id),
        followers,
    }
}

#[test]
fn test_top_tracks_by_duration_is_stable() {
    let tracks = vec![
        create_test_track("t1", 300000, &[]),
        create_test_track("t2", 100000, &[]),
        create_test_track("t3", 500000, &[]),
        create_test_track("t4", 500000, &[]),
        create_test_track("t5", 200000, &[]),
    ];

    let top = top_tracks_by_duration(&tracks, 10);

    // Fewer tracks than requested is fine, all of them come back
    assert_eq!(top.len(), 5);

    let names: Vec<&str> = top.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["t3", "t4", "t1", "t5", "t2"]);
}

#[test]
fn test_top_tracks_by_duration_truncates() {
    let tracks: Vec<TrackInfo> = (1..=12)
        .map(|i| create_test_track(&format!("t{}", i), i * 100000, &[]))
        .collect();

    let top = top_tracks_by_duration(&tracks, 10);

    assert_eq!(top.len(), 10);
    assert_eq!(top[0].duration_ms, 1200000);
    assert_eq!(top[9].duration_ms, 300000);
    assert!(top.iter().all(|t| t.duration_ms >= 300000));

    // Original slice untouched
    assert_eq!(tracks[0].name, "t1");
}

#[test]
fn test_top_tracks_by_duration_empty() {
    assert!(top_tracks_by_duration(&[], 10).is_empty());
}

#[test]
fn test_unique_artist_ids_first_seen_order() {
    let tracks = vec![
        create_test_track("t1", 1, &["A", "B"]),
        create_test_track("t2", 1, &["A"]),
        create_test_track("t3", 1, &["C", "B"]),
    ];

    assert_eq!(unique_artist_ids(&tracks), vec!["A", "B", "C"]);
}

#[test]
fn test_unique_artist_ids_excludes_null_sentinel() {
    let tracks = vec![
        create_test_track("t1", 1, &["null", "A"]),
        create_test_track("t2", 1, &["B", "null"]),
        create_test_track("t3", 1, &["null"]),
    ];

    assert_eq!(unique_artist_ids(&tracks), vec!["A", "B"]);
}

#[test]
fn test_unique_artist_ids_keeps_other_odd_ids() {
    // Only the exact sentinel is filtered
    let tracks = vec![create_test_track("t1", 1, &["", "NULL", "null "])];

    assert_eq!(unique_artist_ids(&tracks), vec!["", "NULL", "null "]);
}

#[test]
fn test_remove_duplicate_ids() {
    let mut ids: Vec<String> = ["A", "B", "A", "C", "B"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    remove_duplicate_ids(&mut ids);

    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_sort_artists_by_followers() {
    let mut artists = vec![
        create_test_artist("a", 10),
        create_test_artist("b", 300),
        create_test_artist("c", 10),
        create_test_artist("d", 50),
    ];

    sort_artists_by_followers(&mut artists);

    let ids: Vec<&str> = artists.iter().map(|a| a.id.as_str()).collect();
    // Equal follower counts keep their relative order
    assert_eq!(ids, vec!["b", "d", "a", "c"]);
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(59999), "0:59");
    assert_eq!(format_duration(354000), "5:54");
    assert_eq!(format_duration(3600000), "60:00");
}
