//! Row records and the column-oriented output table.
//!
//! Collection accumulates one [`TrackRow`] per track and converts to the
//! columnar [`FeatureTable`] only at final assembly. Appending whole records
//! makes ragged columns impossible: every column grows by exactly one value
//! per track, in discovery order.

use serde::{Deserialize, Serialize};

/// One dataset row, keyed by track.
///
/// Field order matches the output column order. `release_year` is derived
/// from the first four characters of `release_date` and is `None` when that
/// prefix is not numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRow {
    pub track_id: String,
    pub track_name: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub track_popularity: u32,
    pub acousticness: f64,
    pub danceability: f64,
    pub energy: f64,
    pub instrumentalness: f64,
    pub key: i32,
    pub liveness: f64,
    pub loudness: f64,
    pub mode: i32,
    pub speechiness: f64,
    pub tempo: f64,
    pub time_signature: i32,
    pub valence: f64,
    pub artist_name: String,
    pub artist_id: String,
    pub artist_popularity: u32,
    pub artist_genres: Vec<String>,
    pub artist_followers: u64,
    pub album_name: String,
    pub album_id: String,
    pub album_type: String,
    pub release_date: String,
    pub release_year: Option<i32>,
}

/// Column names in output order.
pub const COLUMNS: [&str; 27] = [
    "track_id",
    "track_name",
    "duration_ms",
    "explicit",
    "track_popularity",
    "acousticness",
    "danceability",
    "energy",
    "instrumentalness",
    "key",
    "liveness",
    "loudness",
    "mode",
    "speechiness",
    "tempo",
    "time_signature",
    "valence",
    "artist_name",
    "artist_id",
    "artist_popularity",
    "artist_genres",
    "artist_followers",
    "album_name",
    "album_id",
    "album_type",
    "release_date",
    "release_year",
];

/// The assembled dataset in column-oriented form.
///
/// Row n of every column belongs to the nth collected track. Built from rows
/// via [`FeatureTable::from_rows`]; serializes to JSON as one array per
/// column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureTable {
    pub track_id: Vec<String>,
    pub track_name: Vec<String>,
    pub duration_ms: Vec<u64>,
    pub explicit: Vec<bool>,
    pub track_popularity: Vec<u32>,
    pub acousticness: Vec<f64>,
    pub danceability: Vec<f64>,
    pub energy: Vec<f64>,
    pub instrumentalness: Vec<f64>,
    pub key: Vec<i32>,
    pub liveness: Vec<f64>,
    pub loudness: Vec<f64>,
    pub mode: Vec<i32>,
    pub speechiness: Vec<f64>,
    pub tempo: Vec<f64>,
    pub time_signature: Vec<i32>,
    pub valence: Vec<f64>,
    pub artist_name: Vec<String>,
    pub artist_id: Vec<String>,
    pub artist_popularity: Vec<u32>,
    pub artist_genres: Vec<Vec<String>>,
    pub artist_followers: Vec<u64>,
    pub album_name: Vec<String>,
    pub album_id: Vec<String>,
    pub album_type: Vec<String>,
    pub release_date: Vec<String>,
    pub release_year: Vec<Option<i32>>,
}

impl FeatureTable {
    pub fn from_rows(rows: Vec<TrackRow>) -> Self {
        let mut table = FeatureTable::default();

        for row in rows {
            table.track_id.push(row.track_id);
            table.track_name.push(row.track_name);
            table.duration_ms.push(row.duration_ms);
            table.explicit.push(row.explicit);
            table.track_popularity.push(row.track_popularity);
            table.acousticness.push(row.acousticness);
            table.danceability.push(row.danceability);
            table.energy.push(row.energy);
            table.instrumentalness.push(row.instrumentalness);
            table.key.push(row.key);
            table.liveness.push(row.liveness);
            table.loudness.push(row.loudness);
            table.mode.push(row.mode);
            table.speechiness.push(row.speechiness);
            table.tempo.push(row.tempo);
            table.time_signature.push(row.time_signature);
            table.valence.push(row.valence);
            table.artist_name.push(row.artist_name);
            table.artist_id.push(row.artist_id);
            table.artist_popularity.push(row.artist_popularity);
            table.artist_genres.push(row.artist_genres);
            table.artist_followers.push(row.artist_followers);
            table.album_name.push(row.album_name);
            table.album_id.push(row.album_id);
            table.album_type.push(row.album_type);
            table.release_date.push(row.release_date);
            table.release_year.push(row.release_year);
        }

        table
    }

    pub fn len(&self) -> usize {
        self.track_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track_id.is_empty()
    }

    /// Renders the table as CSV with a header row.
    ///
    /// Fields containing commas, quotes, or line breaks are quoted with
    /// doubled inner quotes. `artist_genres` is joined with `;`, an absent
    /// `release_year` becomes an empty field.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        out.push_str(&COLUMNS.join(","));
        out.push('\n');

        for i in 0..self.len() {
            let fields = [
                csv_field(&self.track_id[i]),
                csv_field(&self.track_name[i]),
                self.duration_ms[i].to_string(),
                self.explicit[i].to_string(),
                self.track_popularity[i].to_string(),
                self.acousticness[i].to_string(),
                self.danceability[i].to_string(),
                self.energy[i].to_string(),
                self.instrumentalness[i].to_string(),
                self.key[i].to_string(),
                self.liveness[i].to_string(),
                self.loudness[i].to_string(),
                self.mode[i].to_string(),
                self.speechiness[i].to_string(),
                self.tempo[i].to_string(),
                self.time_signature[i].to_string(),
                self.valence[i].to_string(),
                csv_field(&self.artist_name[i]),
                csv_field(&self.artist_id[i]),
                self.artist_popularity[i].to_string(),
                csv_field(&self.artist_genres[i].join(";")),
                self.artist_followers[i].to_string(),
                csv_field(&self.album_name[i]),
                csv_field(&self.album_id[i]),
                csv_field(&self.album_type[i]),
                csv_field(&self.release_date[i]),
                self.release_year[i]
                    .map(|y| y.to_string())
                    .unwrap_or_default(),
            ];
            out.push_str(&fields.join(","));
            out.push('\n');
        }

        out
    }
}

fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
