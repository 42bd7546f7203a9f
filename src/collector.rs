//! Playlist enumeration and batched feature collection.
//!
//! Two entry points: [`collect_features`] builds the dataset for an explicit
//! track-ID list, [`collect_features_for_playlist`] enumerates a playlist
//! first and then collects. Both take the token manager explicitly; there is
//! no process-wide connection state.
//!
//! Collection walks the ID list in fixed batches of 50 (the ceiling the
//! `/tracks`, `/artists`, and playlist-page endpoints share). Each batch
//! issues three sequential requests - tracks, audio features, artists - for
//! exactly that batch's IDs, indexes every response by its returned `id`
//! field, and appends one [`TrackRow`] per input ID. The next batch does not
//! start before the previous one's requests complete.

use std::{collections::HashMap, fmt, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    dataset::{FeatureTable, TrackRow},
    management::TokenManager,
    spotify,
    types::{ArtistObject, AudioFeatures, PlaylistItem, TrackObject},
    utils, warning,
};

/// Maximum IDs per upstream batch call and per playlist page.
///
/// `/tracks`, `/artists`, and `/playlists/{id}/tracks` all cap at 50.
/// `/audio-features` would allow 100 but the same batches are reused.
pub const API_BATCH_LIMIT: usize = 50;

#[derive(Debug)]
pub enum CollectError {
    Request(reqwest::Error),
    MissingTrack(String),
    MissingAudioFeatures(String),
    MissingArtist(String),
    NoArtists(String),
}

impl From<reqwest::Error> for CollectError {
    fn from(err: reqwest::Error) -> Self {
        CollectError::Request(err)
    }
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectError::Request(err) => write!(f, "request failed: {}", err),
            CollectError::MissingTrack(id) => {
                write!(f, "no track object returned for id {}", id)
            }
            CollectError::MissingAudioFeatures(id) => {
                write!(f, "no audio features returned for track {}", id)
            }
            CollectError::MissingArtist(id) => {
                write!(f, "no artist object returned for id {}", id)
            }
            CollectError::NoArtists(id) => write!(f, "track {} has no artists", id),
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Request(err) => Some(err),
            _ => None,
        }
    }
}

/// Retrieves the ordered list of track IDs contained in a playlist.
///
/// Determines the playlist's total length with a limit-1 probe request, then
/// pages through the playlist at 50 items per request, offset 0, 50, 100,
/// ... until the total is reached. IDs are returned in playlist order.
///
/// # Arguments
///
/// * `token_mgr` - Token manager providing valid access tokens per request
/// * `playlist_id` - Spotify ID of the playlist to enumerate
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<String>)` - Track IDs in playlist order
/// - `Err(CollectError)` - The first failed page request; no partial result
///
/// # Removed Tracks
///
/// Playlist entries without a resolvable track ID (removed or local tracks)
/// are skipped with a warning naming the playlist position. The returned
/// list can therefore be shorter than the playlist's advertised total.
///
/// # Example
///
/// ```
/// let ids = enumerate_playlist_track_ids(&mut token_mgr, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// println!("{} tracks found", ids.len());
/// ```
pub async fn enumerate_playlist_track_ids(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<Vec<String>, CollectError> {
    let token = token_mgr.get_valid_token().await;
    let total = spotify::playlists::get_playlist_total(playlist_id, &token).await?;

    let pb = ProgressBar::new_spinner();
    pb.set_message("Enumerating playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut ids: Vec<String> = Vec::with_capacity(total as usize);

    for offset in utils::page_offsets(total, API_BATCH_LIMIT as u64) {
        let token = token_mgr.get_valid_token().await;
        let page = match spotify::playlists::get_playlist_page(
            playlist_id,
            &token,
            API_BATCH_LIMIT as u64,
            offset,
        )
        .await
        {
            Ok(page) => page,
            Err(e) => {
                pb.finish_and_clear();
                return Err(CollectError::Request(e));
            }
        };

        for (position, item) in page.items.into_iter().enumerate() {
            match extract_track_id(item) {
                Some(id) => ids.push(id),
                None => warning!(
                    "Skipping unavailable track at playlist position {}",
                    offset + position as u64
                ),
            }
        }

        pb.set_message(format!("Enumerated {} of {} tracks...", ids.len(), total));
    }

    pb.finish_and_clear();
    Ok(ids)
}

/// Builds the feature dataset for an explicit list of track IDs.
///
/// Processes the IDs in batches of 50. Per batch, three requests are issued
/// strictly for the current batch: full track objects, audio-feature
/// vectors, and the artist object of each track's first-listed artist (one
/// artist ID per track, duplicates kept, no deduplication). Responses are
/// indexed by ID and exactly one row is appended per input ID, so the
/// resulting table preserves input order and input duplicates.
///
/// # Arguments
///
/// * `token_mgr` - Token manager providing valid access tokens per request
/// * `track_ids` - Track IDs to collect, in the order rows should appear
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(FeatureTable)` - One row per input ID, in input order
/// - `Err(CollectError)` - The first failed request or data-shape violation;
///   no partial table
///
/// # Data-Shape Policy
///
/// A batch ID with no returned track object, a track without artists, a
/// null audio-features entry, or a null artist object fails the whole
/// collection with an error naming the offending ID.
///
/// # Example
///
/// ```
/// let table = collect_features(&mut token_mgr, &ids).await?;
/// assert_eq!(table.len(), ids.len());
/// ```
pub async fn collect_features(
    token_mgr: &mut TokenManager,
    track_ids: &[String],
) -> Result<FeatureTable, CollectError> {
    let batch_total = track_ids.len().div_ceil(API_BATCH_LIMIT);
    let mut rows: Vec<TrackRow> = Vec::with_capacity(track_ids.len());

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching track features...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    for (batch_index, batch) in track_ids.chunks(API_BATCH_LIMIT).enumerate() {
        let token = token_mgr.get_valid_token().await;

        let batch_rows = match fetch_batch(batch, &token).await {
            Ok(batch_rows) => batch_rows,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        rows.extend(batch_rows);
        pb.set_message(format!(
            "Fetched batch {current}/{total} ({rows} rows)...",
            current = batch_index + 1,
            total = batch_total,
            rows = rows.len()
        ));
    }

    pb.finish_and_clear();
    Ok(FeatureTable::from_rows(rows))
}

/// Builds the feature dataset for all tracks of a playlist.
///
/// Fused variant: enumerates the playlist's track IDs, then collects
/// features for them. Row order matches playlist order.
///
/// # Example
///
/// ```
/// let table = collect_features_for_playlist(&mut token_mgr, "37i9dQZF1DXcBWIGoYBM5M").await?;
/// ```
pub async fn collect_features_for_playlist(
    token_mgr: &mut TokenManager,
    playlist_id: &str,
) -> Result<FeatureTable, CollectError> {
    let ids = enumerate_playlist_track_ids(token_mgr, playlist_id).await?;
    collect_features(token_mgr, &ids).await
}

// The three sequential requests for one batch, then assembly.
async fn fetch_batch(batch: &[String], token: &str) -> Result<Vec<TrackRow>, CollectError> {
    let tracks = spotify::tracks::get_several_tracks(batch, token).await?;
    let features = spotify::tracks::get_several_audio_features(batch, token).await?;

    let tracks_by_id = index_tracks(tracks);
    let features_by_id = index_features(features);

    let artist_ids = primary_artist_ids(batch, &tracks_by_id)?;
    let artists = spotify::artists::get_several_artists(&artist_ids, token).await?;
    let artists_by_id = index_artists(artists);

    build_rows(batch, &tracks_by_id, &features_by_id, &artists_by_id)
}

pub fn extract_track_id(item: PlaylistItem) -> Option<String> {
    item.track.and_then(|t| t.id)
}

pub fn index_tracks(tracks: Vec<TrackObject>) -> HashMap<String, TrackObject> {
    tracks.into_iter().map(|t| (t.id.clone(), t)).collect()
}

pub fn index_features(features: Vec<Option<AudioFeatures>>) -> HashMap<String, AudioFeatures> {
    features
        .into_iter()
        .flatten()
        .map(|f| (f.id.clone(), f))
        .collect()
}

pub fn index_artists(artists: Vec<Option<ArtistObject>>) -> HashMap<String, ArtistObject> {
    artists
        .into_iter()
        .flatten()
        .map(|a| (a.id.clone(), a))
        .collect()
}

// First-listed artist ID for every batch ID, in batch order. Duplicates are
// kept; tracks sharing an artist request it once per occurrence.
pub fn primary_artist_ids(
    ids: &[String],
    tracks: &HashMap<String, TrackObject>,
) -> Result<Vec<String>, CollectError> {
    let mut artist_ids = Vec::with_capacity(ids.len());

    for id in ids {
        let track = tracks
            .get(id)
            .ok_or_else(|| CollectError::MissingTrack(id.clone()))?;
        let artist = track
            .artists
            .first()
            .ok_or_else(|| CollectError::NoArtists(id.clone()))?;
        artist_ids.push(artist.id.clone());
    }

    Ok(artist_ids)
}

/// Assembles one [`TrackRow`] per input ID from the ID-indexed batch
/// responses. Lookups go by ID, never by response position, so upstream
/// reordering cannot misalign rows.
pub fn build_rows(
    ids: &[String],
    tracks: &HashMap<String, TrackObject>,
    features: &HashMap<String, AudioFeatures>,
    artists: &HashMap<String, ArtistObject>,
) -> Result<Vec<TrackRow>, CollectError> {
    let mut rows = Vec::with_capacity(ids.len());

    for id in ids {
        let track = tracks
            .get(id)
            .ok_or_else(|| CollectError::MissingTrack(id.clone()))?;
        let feature = features
            .get(id)
            .ok_or_else(|| CollectError::MissingAudioFeatures(id.clone()))?;
        let artist_ref = track
            .artists
            .first()
            .ok_or_else(|| CollectError::NoArtists(id.clone()))?;
        let artist = artists
            .get(&artist_ref.id)
            .ok_or_else(|| CollectError::MissingArtist(artist_ref.id.clone()))?;

        rows.push(TrackRow {
            track_id: track.id.clone(),
            track_name: track.name.clone(),
            duration_ms: track.duration_ms,
            explicit: track.explicit,
            track_popularity: track.popularity,
            acousticness: feature.acousticness,
            danceability: feature.danceability,
            energy: feature.energy,
            instrumentalness: feature.instrumentalness,
            key: feature.key,
            liveness: feature.liveness,
            loudness: feature.loudness,
            mode: feature.mode,
            speechiness: feature.speechiness,
            tempo: feature.tempo,
            time_signature: feature.time_signature,
            valence: feature.valence,
            artist_name: artist_ref.name.clone(),
            artist_id: artist_ref.id.clone(),
            artist_popularity: artist.popularity,
            artist_genres: artist.genres.clone(),
            artist_followers: artist.followers.total,
            album_name: track.album.name.clone(),
            album_id: track.album.id.clone(),
            album_type: track.album.album_type.clone(),
            release_date: track.album.release_date.clone(),
            release_year: utils::parse_release_year(&track.album.release_date),
        });
    }

    Ok(rows)
}
