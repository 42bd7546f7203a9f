use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksResponse {
    pub items: Vec<PlaylistItem>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<PlaylistTrackRef>,
}

// A track entry inside a playlist page. Removed or local tracks surface
// either as a null item or as an object without an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrackRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralTracksResponse {
    pub tracks: Vec<TrackObject>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub popularity: u32,
    pub artists: Vec<TrackArtistRef>,
    pub album: AlbumObject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    pub album_type: String,
    pub release_date: String,
}

// The audio-features endpoint returns null array entries for ids it cannot
// resolve, hence the Option wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralAudioFeaturesResponse {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioFeatures {
    pub id: String,
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
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveralArtistsResponse {
    pub artists: Vec<Option<ArtistObject>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    pub popularity: u32,
    pub genres: Vec<String>,
    pub followers: Followers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Followers {
    pub total: u64,
}

#[derive(Tabled)]
pub struct TrackPreviewRow {
    pub track: String,
    pub artist: String,
    pub album: String,
    pub year: String,
    pub tempo: String,
    pub energy: String,
}
