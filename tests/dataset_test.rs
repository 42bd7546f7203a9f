use playfeat::dataset::{COLUMNS, FeatureTable, TrackRow};

// Helper function to create a test row
fn create_test_row(track_id: &str, track_name: &str, release_date: &str) -> TrackRow {
    TrackRow {
        track_id: track_id.to_string(),
        track_name: track_name.to_string(),
        duration_ms: 200_000,
        explicit: false,
        track_popularity: 55,
        acousticness: 0.12,
        danceability: 0.8,
        energy: 0.7,
        instrumentalness: 0.0,
        key: 5,
        liveness: 0.1,
        loudness: -6.5,
        mode: 1,
        speechiness: 0.04,
        tempo: 120.0,
        time_signature: 4,
        valence: 0.6,
        artist_name: "Artist".to_string(),
        artist_id: format!("{}_artist", track_id),
        artist_popularity: 70,
        artist_genres: vec!["pop".to_string(), "dance pop".to_string()],
        artist_followers: 1_000_000,
        album_name: "Album".to_string(),
        album_id: format!("{}_album", track_id),
        album_type: "album".to_string(),
        release_date: release_date.to_string(),
        release_year: playfeat::utils::parse_release_year(release_date),
    }
}

#[test]
fn test_columns_layout() {
    assert_eq!(COLUMNS.len(), 27);
    assert_eq!(COLUMNS[0], "track_id");
    assert_eq!(COLUMNS[26], "release_year");
}

#[test]
fn test_from_rows_preserves_order_and_lengths() {
    let rows = vec![
        create_test_row("id1", "Track One", "1999-05-01"),
        create_test_row("id2", "Track Two", "2010-01-01"),
        create_test_row("id3", "Track Three", "2023"),
    ];

    let table = FeatureTable::from_rows(rows);

    // Row order matches append order
    assert_eq!(table.track_id, vec!["id1", "id2", "id3"]);
    assert_eq!(table.release_year, vec![Some(1999), Some(2010), Some(2023)]);

    // Every column grew by exactly one value per row
    assert_eq!(table.len(), 3);
    assert_eq!(table.track_name.len(), 3);
    assert_eq!(table.tempo.len(), 3);
    assert_eq!(table.artist_genres.len(), 3);
    assert_eq!(table.artist_followers.len(), 3);
    assert_eq!(table.release_date.len(), 3);
}

#[test]
fn test_from_rows_keeps_duplicates() {
    let rows = vec![
        create_test_row("id1", "Track One", "1999-05-01"),
        create_test_row("id1", "Track One", "1999-05-01"),
    ];

    let table = FeatureTable::from_rows(rows);

    // Duplicate inputs are preserved positionally, not deduplicated
    assert_eq!(table.len(), 2);
    assert_eq!(table.track_id, vec!["id1", "id1"]);
}

#[test]
fn test_empty_table_has_all_columns() {
    let table = FeatureTable::from_rows(Vec::new());

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);

    // CSV output still carries the full header row
    let csv = table.to_csv();
    let mut lines = csv.lines();
    assert_eq!(lines.next().unwrap(), COLUMNS.join(","));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_to_csv_row_count_and_header() {
    let rows = vec![
        create_test_row("id1", "Track One", "1999-05-01"),
        create_test_row("id2", "Track Two", "2010-01-01"),
    ];

    let csv = FeatureTable::from_rows(rows).to_csv();
    let lines: Vec<&str> = csv.lines().collect();

    // Header plus one line per row
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("id1,"));
    assert!(lines[2].starts_with("id2,"));
}

#[test]
fn test_to_csv_quoting() {
    let mut row = create_test_row("id1", "Hello, World", "1999-05-01");
    row.album_name = "The \"Best\" Of".to_string();
    let csv = FeatureTable::from_rows(vec![row]).to_csv();

    // Commas force quoting, inner quotes are doubled
    assert!(csv.contains("\"Hello, World\""));
    assert!(csv.contains("\"The \"\"Best\"\" Of\""));
}

#[test]
fn test_to_csv_genre_join_and_missing_year() {
    let mut row = create_test_row("id1", "Track One", "not-a-date");
    row.artist_genres = vec!["pop".to_string(), "synthpop".to_string()];
    assert_eq!(row.release_year, None);

    let csv = FeatureTable::from_rows(vec![row]).to_csv();
    let data_line = csv.lines().nth(1).unwrap();

    // Genres are joined with ';' into one field
    assert!(data_line.contains("pop;synthpop"));

    // A missing release year renders as an empty trailing field
    assert!(data_line.ends_with("not-a-date,"));
}

#[test]
fn test_json_export_is_column_oriented() {
    let rows = vec![
        create_test_row("id1", "Track One", "1999-05-01"),
        create_test_row("id2", "Track Two", "2010-01-01"),
    ];

    let json = serde_json::to_value(FeatureTable::from_rows(rows)).unwrap();

    // One array per column, keyed by column name
    assert_eq!(json["track_id"][0], "id1");
    assert_eq!(json["track_id"][1], "id2");
    assert_eq!(json["release_year"][0], 1999);
    assert_eq!(json["artist_genres"][0][0], "pop");
}
