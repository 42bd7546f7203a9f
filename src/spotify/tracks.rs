use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{
    config,
    types::{AudioFeatures, SeveralAudioFeaturesResponse, SeveralTracksResponse, TrackObject},
    warning,
};

/// Retrieves full track objects for a batch of track IDs in a single request.
///
/// Fetches track metadata (name, duration, explicit flag, popularity, artist
/// references, album data) for up to 50 tracks at once. This is the first of
/// the three batch fetches the collector issues per chunk of IDs.
///
/// # Arguments
///
/// * `ids` - Track IDs to fetch; at most 50 per call (Spotify API limit)
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<TrackObject>)` - Track objects for the requested IDs
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Batch Processing
///
/// The IDs are joined with commas into a single `?ids=` query parameter.
/// One API call per batch reduces network overhead; the caller is
/// responsible for chunking longer ID lists.
///
/// # Response Ordering
///
/// The API documents that results follow request order, but the collector
/// does not rely on that - it indexes the returned objects by their own
/// `id` field before assembly.
///
/// # Rate Limiting
///
/// 429 Too Many Requests responses are retried after the delay advertised
/// in the `Retry-After` header. Delays above 120 seconds are not slept on;
/// a warning is issued and the error is propagated instead. 502 Bad Gateway
/// responses are retried after 10 seconds.
///
/// # Example
///
/// ```
/// let batch: Vec<String> = track_ids.iter().take(50).cloned().collect();
/// let tracks = get_several_tracks(&batch, &token).await?;
/// println!("Fetched {} tracks", tracks.len());
/// ```
pub async fn get_several_tracks(
    ids: &[String],
    token: &str,
) -> Result<Vec<TrackObject>, reqwest::Error> {
    let track_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{url}/tracks?ids={track_ids}",
        url = &config::spotify_apiurl(),
        track_ids = track_ids
    );

    let json = fetch_with_retry::<SeveralTracksResponse>(&api_url, token).await?;

    Ok(json.tracks)
}

/// Retrieves audio-feature vectors for a batch of track IDs.
///
/// Fetches the algorithmically derived numeric descriptors (danceability,
/// energy, tempo, ...) for up to 100 tracks at once; the collector reuses
/// its 50-ID batches conservatively.
///
/// # Arguments
///
/// * `ids` - Track IDs to fetch features for
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Option<AudioFeatures>>)` - One entry per requested ID; `None`
///   where the API could not resolve an ID
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Null Entries
///
/// The endpoint returns a JSON null in place of a feature object for IDs it
/// cannot analyze. These are preserved as `None` so the caller can apply
/// its own missing-data policy.
///
/// # Rate Limiting
///
/// Same handling as [`get_several_tracks`]: Retry-After-respecting sleep on
/// 429, 10-second retry on 502, everything else propagated.
pub async fn get_several_audio_features(
    ids: &[String],
    token: &str,
) -> Result<Vec<Option<AudioFeatures>>, reqwest::Error> {
    let track_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{url}/audio-features?ids={track_ids}",
        url = &config::spotify_apiurl(),
        track_ids = track_ids
    );

    let json = fetch_with_retry::<SeveralAudioFeaturesResponse>(&api_url, token).await?;

    Ok(json.audio_features)
}

// Shared GET-with-retry loop for the batch endpoints: sleeps out 429s per
// the retry-after header (up to 120s), retries 502s after 10s, propagates
// everything else.
pub(crate) async fn fetch_with_retry<T: serde::de::DeserializeOwned>(
    api_url: &str,
    token: &str,
) -> Result<T, reqwest::Error> {
    loop {
        let client = Client::new();
        let response = client.get(api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => {
                if resp.status() == StatusCode::TOO_MANY_REQUESTS {
                    if let Some(retry_after) = resp.headers().get("retry-after") {
                        let retry_after = retry_after
                            .to_str()
                            .unwrap_or("0")
                            .parse::<u64>()
                            .unwrap_or(0);
                        if retry_after <= 120 {
                            sleep(Duration::from_secs(retry_after)).await;
                            continue; // retry
                        } else {
                            warning!(
                                "Retry after has reached an abnormal high of {} seconds. Try again tomorrow.",
                                retry_after
                            );
                        }
                    }
                }

                match resp.error_for_status() {
                    Ok(valid_response) => valid_response,
                    Err(err) => {
                        if let Some(status) = err.status() {
                            if status == StatusCode::BAD_GATEWAY {
                                sleep(Duration::from_secs(10)).await;
                                continue; // retry
                            }
                        }
                        return Err(err); // propagate other errors
                    }
                }
            }
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        return response.json::<T>().await;
    }
}
