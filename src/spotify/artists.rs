use crate::{
    config,
    spotify::tracks::fetch_with_retry,
    types::{ArtistObject, SeveralArtistsResponse},
};

/// Retrieves artist objects for a batch of artist IDs in a single request.
///
/// Fetches artist metadata (name, popularity, genres, follower count) for up
/// to 50 artists at once. The collector passes one artist ID per track in
/// the batch - duplicates included - and indexes the result by ID, so shared
/// artists resolve to the same object.
///
/// # Arguments
///
/// * `ids` - Artist IDs to fetch; at most 50 per call (Spotify API limit)
/// * `token` - Valid access token for Spotify API authentication
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<Option<ArtistObject>>)` - One entry per requested ID; `None`
///   where the API could not resolve an ID
/// - `Err(reqwest::Error)` - Network error, API error, or HTTP error
///
/// # Rate Limiting
///
/// Same handling as the track batch fetches: Retry-After-respecting sleep
/// on 429, 10-second retry on 502, everything else propagated.
pub async fn get_several_artists(
    ids: &[String],
    token: &str,
) -> Result<Vec<Option<ArtistObject>>, reqwest::Error> {
    let artist_ids = ids
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let api_url = format!(
        "{url}/artists?ids={artist_ids}",
        url = &config::spotify_apiurl(),
        artist_ids = artist_ids
    );

    let json = fetch_with_retry::<SeveralArtistsResponse>(&api_url, token).await?;

    Ok(json.artists)
}
