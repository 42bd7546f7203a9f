use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;
use serde_json::Value;

use crate::{config, types::Token};

/// Obtains an access token via the OAuth 2.0 client-credentials grant.
///
/// Exchanges the application's client ID and client secret for an access
/// token. This grant covers server-to-server access to public catalog data
/// (playlists, tracks, audio features, artists) and involves no user
/// authorization step and no refresh token; expired tokens are simply
/// re-obtained with another call.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Access token with expiry metadata and obtained-at timestamp
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
///
/// # Credential Transport
///
/// The credentials travel in the `Authorization` header as HTTP Basic,
/// base64-encoded `client_id:client_secret`, with the grant type in the
/// form body as specified by RFC 6749 §4.4.
///
/// # Error Conditions
///
/// Common failures include:
/// - Invalid or revoked client credentials (400/401 from the token endpoint)
/// - Network connectivity issues
/// - Malformed response data
///
/// # Example
///
/// ```
/// let token = request_token().await?;
/// println!("Token expires in {} seconds", token.expires_in);
/// ```
pub async fn request_token() -> Result<Token, reqwest::Error> {
    let credentials = format!(
        "{client_id}:{client_secret}",
        client_id = &config::spotify_client_id(),
        client_secret = &config::spotify_client_secret()
    );

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header(
            "Authorization",
            format!("Basic {}", STANDARD.encode(credentials)),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    let json: Value = res.json().await?;

    Ok(Token {
        access_token: json["access_token"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        token_type: json["token_type"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
