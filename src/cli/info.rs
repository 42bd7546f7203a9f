use chrono::Utc;

use crate::{error, info, management::TokenManager, spotify, warning};

/// Displays information about playlists and the cached token.
///
/// With `--playlist <ID>` the playlist's advertised track total is probed
/// with a minimal limit-1 request. With `--token` the cached token's
/// remaining lifetime is reported. The first matching flag wins.
pub async fn info(playlist: Option<String>, token: bool) {
    if let Some(playlist_id) = playlist {
        let mut token_mgr = match TokenManager::load().await {
            Ok(t) => t,
            Err(e) => {
                error!(
                    "Failed to load token. Please run playfeat auth\n Error: {}",
                    e
                );
            }
        };

        let access_token = token_mgr.get_valid_token().await;
        match spotify::playlists::get_playlist_total(&playlist_id, &access_token).await {
            Ok(total) => info!("Playlist {} contains {} tracks.", playlist_id, total),
            Err(e) => warning!("Failed to fetch playlist info: {}", e),
        }

        return;
    }

    if token {
        match TokenManager::load().await {
            Ok(mgr) => {
                let cached = mgr.current_token();
                let now = Utc::now().timestamp() as u64;
                let expires_at = cached.obtained_at + cached.expires_in;
                if now < expires_at {
                    info!("Cached token valid for another {} seconds.", expires_at - now);
                } else {
                    warning!(
                        "Cached token expired {} seconds ago. It is renewed on next use.",
                        now - expires_at
                    );
                }
            }
            Err(_) => warning!("No cached token found. Run playfeat auth."),
        }
    }
}
