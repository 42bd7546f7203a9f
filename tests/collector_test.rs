use std::collections::HashMap;

use playfeat::collector::*;
use playfeat::types::{
    AlbumObject, ArtistObject, AudioFeatures, Followers, PlaylistItem, PlaylistTrackRef,
    TrackObject, TrackArtistRef,
};
use playfeat::utils::page_offsets;

// Helper function to create a test track
fn create_test_track(id: &str, artist_id: &str, release_date: &str) -> TrackObject {
    TrackObject {
        id: id.to_string(),
        name: format!("{} name", id),
        duration_ms: 180_000,
        explicit: false,
        popularity: 40,
        artists: vec![TrackArtistRef {
            id: artist_id.to_string(),
            name: format!("{} name", artist_id),
        }],
        album: AlbumObject {
            id: format!("{}_album", id),
            name: "Some Album".to_string(),
            album_type: "album".to_string(),
            release_date: release_date.to_string(),
        },
    }
}

// Helper function to create test audio features
fn create_test_features(id: &str) -> AudioFeatures {
    AudioFeatures {
        id: id.to_string(),
        acousticness: 0.3,
        danceability: 0.6,
        energy: 0.5,
        instrumentalness: 0.01,
        key: 7,
        liveness: 0.2,
        loudness: -8.0,
        mode: 0,
        speechiness: 0.05,
        tempo: 98.0,
        time_signature: 4,
        valence: 0.4,
    }
}

// Helper function to create a test artist
fn create_test_artist(id: &str) -> ArtistObject {
    ArtistObject {
        id: id.to_string(),
        name: format!("{} name", id),
        popularity: 65,
        genres: vec!["indie rock".to_string()],
        followers: Followers { total: 42_000 },
    }
}

fn ids(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_extract_track_id() {
    // A regular playlist item yields its track id
    let item = PlaylistItem {
        track: Some(PlaylistTrackRef {
            id: Some("t1".to_string()),
        }),
    };
    assert_eq!(extract_track_id(item), Some("t1".to_string()));

    // A removed track surfaces as a null track object and is skipped
    let removed = PlaylistItem { track: None };
    assert_eq!(extract_track_id(removed), None);

    // Local tracks carry a track object without an id
    let local = PlaylistItem {
        track: Some(PlaylistTrackRef { id: None }),
    };
    assert_eq!(extract_track_id(local), None);
}

#[test]
fn test_index_features_skips_null_entries() {
    let features = vec![Some(create_test_features("t1")), None];
    let indexed = index_features(features);

    // Null entries do not appear in the index; the missing id is caught
    // later by build_rows
    assert_eq!(indexed.len(), 1);
    assert!(indexed.contains_key("t1"));
}

#[test]
fn test_index_artists_skips_null_entries() {
    let artists = vec![None, Some(create_test_artist("a1"))];
    let indexed = index_artists(artists);

    assert_eq!(indexed.len(), 1);
    assert!(indexed.contains_key("a1"));
}

#[test]
fn test_primary_artist_ids_keeps_duplicates() {
    let tracks = index_tracks(vec![
        create_test_track("t1", "a1", "2020-01-01"),
        create_test_track("t2", "a1", "2020-01-01"),
        create_test_track("t3", "a2", "2020-01-01"),
    ]);

    let artist_ids = primary_artist_ids(&ids(&["t1", "t2", "t3"]), &tracks).unwrap();

    // One artist id per track, shared artists repeated per occurrence
    assert_eq!(artist_ids, ids(&["a1", "a1", "a2"]));
}

#[test]
fn test_primary_artist_ids_missing_track() {
    let tracks = index_tracks(vec![create_test_track("t1", "a1", "2020-01-01")]);

    let result = primary_artist_ids(&ids(&["t1", "t2"]), &tracks);
    assert!(matches!(result, Err(CollectError::MissingTrack(id)) if id == "t2"));
}

#[test]
fn test_build_rows_preserves_order_and_duplicates() {
    let input = ids(&["t2", "t1", "t2"]);
    let tracks = index_tracks(vec![
        create_test_track("t1", "a1", "1987-05-11"),
        create_test_track("t2", "a2", "2001-09-01"),
    ]);
    let features = index_features(vec![
        Some(create_test_features("t1")),
        Some(create_test_features("t2")),
    ]);
    let artists = index_artists(vec![
        Some(create_test_artist("a1")),
        Some(create_test_artist("a2")),
    ]);

    let rows = build_rows(&input, &tracks, &features, &artists).unwrap();

    // The nth row belongs to the nth input id, duplicates included
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].track_id, "t2");
    assert_eq!(rows[1].track_id, "t1");
    assert_eq!(rows[2].track_id, "t2");

    // Metadata and features joined by id, not by response position
    assert_eq!(rows[1].artist_id, "a1");
    assert_eq!(rows[1].release_year, Some(1987));
    assert_eq!(rows[0].release_year, Some(2001));
    assert_eq!(rows[0].tempo, 98.0);
    assert_eq!(rows[0].artist_followers, 42_000);
}

#[test]
fn test_build_rows_missing_features() {
    let input = ids(&["t1"]);
    let tracks = index_tracks(vec![create_test_track("t1", "a1", "2020-01-01")]);
    let features = index_features(vec![None]);
    let artists = index_artists(vec![Some(create_test_artist("a1"))]);

    let result = build_rows(&input, &tracks, &features, &artists);
    assert!(matches!(
        result,
        Err(CollectError::MissingAudioFeatures(id)) if id == "t1"
    ));
}

#[test]
fn test_build_rows_track_without_artists() {
    let mut track = create_test_track("t1", "a1", "2020-01-01");
    track.artists.clear();

    let input = ids(&["t1"]);
    let tracks = index_tracks(vec![track]);
    let features = index_features(vec![Some(create_test_features("t1"))]);
    let artists: HashMap<String, ArtistObject> = HashMap::new();

    let result = build_rows(&input, &tracks, &features, &artists);
    assert!(matches!(result, Err(CollectError::NoArtists(id)) if id == "t1"));
}

#[test]
fn test_build_rows_missing_artist_object() {
    let input = ids(&["t1"]);
    let tracks = index_tracks(vec![create_test_track("t1", "a1", "2020-01-01")]);
    let features = index_features(vec![Some(create_test_features("t1"))]);
    let artists = index_artists(vec![None]);

    let result = build_rows(&input, &tracks, &features, &artists);
    assert!(matches!(
        result,
        Err(CollectError::MissingArtist(id)) if id == "a1"
    ));
}

#[test]
fn test_build_rows_unparseable_release_date() {
    let input = ids(&["t1"]);
    let tracks = index_tracks(vec![create_test_track("t1", "a1", "unknown")]);
    let features = index_features(vec![Some(create_test_features("t1"))]);
    let artists = index_artists(vec![Some(create_test_artist("a1"))]);

    // A date without a numeric prefix leaves the year empty instead of
    // failing the collection
    let rows = build_rows(&input, &tracks, &features, &artists).unwrap();
    assert_eq!(rows[0].release_date, "unknown");
    assert_eq!(rows[0].release_year, None);
}

#[test]
fn test_batching_math_for_120_tracks() {
    // Enumeration: 120 tracks at page size 50 take pages at offsets 0, 50, 100
    assert_eq!(page_offsets(120, API_BATCH_LIMIT as u64), vec![0, 50, 100]);

    // Collection: the same 120 ids split into batches of 50, 50, 20
    let input: Vec<String> = (0..120).map(|i| format!("t{}", i)).collect();
    let batches: Vec<&[String]> = input.chunks(API_BATCH_LIMIT).collect();

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 50);
    assert_eq!(batches[1].len(), 50);
    assert_eq!(batches[2].len(), 20);

    // No batch exceeds the upstream ceiling
    assert!(batches.iter().all(|b| b.len() <= API_BATCH_LIMIT));

    // Batches cover the input in order
    assert_eq!(batches[0][0], "t0");
    assert_eq!(batches[2][19], "t119");
}

#[test]
fn test_empty_input_produces_empty_batching() {
    assert_eq!(page_offsets(0, API_BATCH_LIMIT as u64), Vec::<u64>::new());

    let input: Vec<String> = Vec::new();
    assert_eq!(input.chunks(API_BATCH_LIMIT).count(), 0);
}
