use longplay::spotify::tracks::{parse_item, parse_track};
use longplay::types::{ItemOutcome, PlaylistTracksPage};
use serde_json::json;

fn outcomes(page: serde_json::Value) -> Vec<ItemOutcome> {
    let page: PlaylistTracksPage = serde_json::from_value(page).unwrap();
    page.items.iter().map(parse_item).collect()
}

#[test]
fn test_parse_item_complete_track() {
    let item = json!({
        "added_at": "2024-01-01T00:00:00Z",
        "track": {
            "name": "Song",
            "duration_ms": 215000,
            "artists": [
                { "name": "First", "id": "a1" },
                { "name": "Second", "id": "a2", "type": "artist" }
            ]
        }
    });

    let ItemOutcome::Track(track) = parse_item(&item) else {
        panic!("expected a track");
    };
    assert_eq!(track.name, "Song");
    assert_eq!(track.duration_ms, 215000);
    let ids: Vec<&str> = track.artists.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(track.artists[1].name, "Second");
}

#[test]
fn test_parse_item_null_or_missing_track_is_skipped() {
    assert_eq!(parse_item(&json!({ "track": null })), ItemOutcome::Skipped);
    assert_eq!(parse_item(&json!({ "added_at": "x" })), ItemOutcome::Skipped);
}

#[test]
fn test_parse_item_missing_field_is_dropped() {
    let missing_duration = json!({ "track": { "name": "Song", "artists": [] } });
    let missing_name = json!({ "track": { "duration_ms": 1, "artists": [] } });
    let missing_artists = json!({ "track": { "name": "Song", "duration_ms": 1 } });

    for item in [missing_duration, missing_name, missing_artists] {
        assert!(matches!(parse_item(&item), ItemOutcome::Dropped(_)));
    }
}

#[test]
fn test_parse_track_wrong_types_are_rejected() {
    assert!(parse_track(&json!({ "name": "S", "duration_ms": "215000", "artists": [] })).is_err());
    assert!(parse_track(&json!({ "name": "S", "duration_ms": -5, "artists": [] })).is_err());
    assert!(parse_track(&json!({ "name": 7, "duration_ms": 1, "artists": [] })).is_err());
    assert!(parse_track(&json!({ "name": "S", "duration_ms": 1, "artists": [{ "name": "A" }] })).is_err());
}

#[test]
fn test_parse_track_large_duration() {
    let track = parse_track(&json!({
        "name": "Drone",
        "duration_ms": 5_000_000_000u64,
        "artists": []
    }))
    .unwrap();

    assert_eq!(track.duration_ms, 5_000_000_000);
}

#[test]
fn test_parse_track_null_artist_id_becomes_sentinel() {
    let track = parse_track(&json!({
        "name": "Local file",
        "duration_ms": 90000,
        "artists": [{ "name": "Someone", "id": null }]
    }))
    .unwrap();

    assert_eq!(track.artists[0].id, "null");
}

#[test]
fn test_bad_item_does_not_affect_siblings() {
    let results = outcomes(json!({
        "items": [
            { "track": { "name": "One", "duration_ms": 1000, "artists": [] } },
            { "track": null },
            { "track": { "name": "Broken", "artists": [] } },
            { "track": { "name": "Two", "duration_ms": 2000, "artists": [] } }
        ],
        "next": null
    }));

    let tracks: Vec<&str> = results
        .iter()
        .filter_map(|o| match o {
            ItemOutcome::Track(t) => Some(t.name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(tracks, vec!["One", "Two"]);
    assert_eq!(results.iter().filter(|o| **o == ItemOutcome::Skipped).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|o| matches!(o, ItemOutcome::Dropped(_)))
            .count(),
        1
    );
}

#[test]
fn test_page_next_may_be_absent_or_null() {
    let absent: PlaylistTracksPage = serde_json::from_value(json!({ "items": [] })).unwrap();
    let null: PlaylistTracksPage =
        serde_json::from_value(json!({ "items": [], "next": null })).unwrap();
    let link: PlaylistTracksPage =
        serde_json::from_value(json!({ "items": [], "next": "https://next" })).unwrap();

    assert_eq!(absent.next, None);
    assert_eq!(null.next, None);
    assert_eq!(link.next.as_deref(), Some("https://next"));
}
