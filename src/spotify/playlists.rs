use std::time::Duration;

use reqwest::{Client, StatusCode};
use tokio::time::sleep;

use crate::{config, types::PlaylistTracksResponse};

/// Retrieves one page of a playlist's tracks from the Spotify Web API.
///
/// Fetches playlist items using limit/offset pagination. Items are returned
/// in playlist order; the response also carries the playlist's total track
/// count. The function retries automatically on 502 Bad Gateway responses.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the playlist to page through
/// * `token` - Valid access token for Spotify API authentication
/// * `limit` - Maximum number of items to return in this request (1-50)
/// * `offset` - Zero-based index of the first item to return
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(PlaylistTracksResponse)` - One page of items plus the total count
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Removed Tracks
///
/// Playlist items can reference tracks that are no longer available; those
/// items carry a null track object (or a track without an id). The caller
/// decides how to handle them - this function returns the page as-is.
///
/// # Retry Logic
///
/// The function implements automatic retry logic for 502 Bad Gateway errors
/// with a 10-second delay between attempts. Other errors are propagated
/// immediately.
///
/// # Example
///
/// ```
/// let page = get_playlist_page("37i9dQZF1DXcBWIGoYBM5M", &token, 50, 0).await?;
/// println!("{} of {} items", page.items.len(), page.total);
/// ```
pub async fn get_playlist_page(
    playlist_id: &str,
    token: &str,
    limit: u64,
    offset: u64,
) -> Result<PlaylistTracksResponse, reqwest::Error> {
    loop {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks?limit={limit}&offset={offset}",
            uri = &config::spotify_apiurl(),
            id = playlist_id,
            limit = limit,
            offset = offset
        );

        let client = Client::new();
        let response = client.get(&api_url).bearer_auth(token).send().await;

        let response = match response {
            Ok(resp) => match resp.error_for_status() {
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
            },
            Err(err) => {
                return Err(err);
            } // network or reqwest error
        };

        let res = response.json::<PlaylistTracksResponse>().await?;

        return Ok(res);
    }
}

/// Retrieves the total number of tracks in a playlist.
///
/// Makes a minimal limit-1 probe request to get just the total count from
/// the response metadata without transferring the playlist's items.
///
/// # Arguments
///
/// * `playlist_id` - Spotify ID of the playlist
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(u64)` - Total number of items in the playlist
/// - `Err(reqwest::Error)` - Network error, API error, or authentication failure
///
/// # Retry Logic
///
/// Implements the same retry logic as [`get_playlist_page`] for 502 Bad
/// Gateway errors with a 10-second delay.
///
/// # API Efficiency
///
/// This function uses `limit=1` to minimize data transfer while still
/// getting the total count from the API response metadata.
///
/// # Example
///
/// ```
/// let total = get_playlist_total("37i9dQZF1DXcBWIGoYBM5M", &token).await?;
/// println!("Playlist contains {} tracks", total);
/// ```
pub async fn get_playlist_total(playlist_id: &str, token: &str) -> Result<u64, reqwest::Error> {
    let page = get_playlist_page(playlist_id, token, 1, 0).await?;
    Ok(page.total)
}
