use crate::{error, management::TokenManager, spotify, success};

pub async fn auth() {
    let token = match spotify::auth::request_token().await {
        Ok(t) => t,
        Err(e) => {
            error!("Failed to obtain token: {}", e);
        }
    };

    if token.access_token.is_empty() {
        error!("Token endpoint returned no access token. Check your client credentials.");
    }

    let token_manager = TokenManager::new(token);
    if let Err(e) = token_manager.persist().await {
        error!("Failed to save token to cache: {}", e);
    }

    success!("Authentication successful!");
}
