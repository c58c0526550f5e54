//! Backend OAuth2 with the Discord provider.
//!
//! The backend brokers the Discord authorization: it issues the URL the user opens (`login`)
//! and exchanges the code Discord hands back for a backend session (`callback`). The Discord
//! user ID travels through the flow as the opaque `state` value.

use url::Url;

use crate::server::state::{AppState, OAuth2Client};

pub mod callback;
pub mod login;

#[cfg(test)]
mod test;

/// Service for linking Discord users to backend accounts.
pub struct BackendAuthService<'a> {
    /// HTTP client with redirects disabled, so authorize redirects can be read.
    pub http_client: &'a reqwest::Client,
    /// OAuth2 client pointed at the backend token endpoint.
    pub oauth_client: &'a OAuth2Client,
    /// Backend base URL.
    pub backend_url: &'a Url,
    /// Backend API key sent with every backend request.
    pub api_key: &'a str,
    /// Public callback URL the backend redirects to after authorization.
    pub callback_url: &'a str,
}

impl<'a> BackendAuthService<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        backend_url: &'a Url,
        api_key: &'a str,
        callback_url: &'a str,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            backend_url,
            api_key,
            callback_url,
        }
    }

    /// Borrows everything the service needs from the application state.
    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(
            &state.http_client,
            &state.oauth_client,
            &state.backend_url,
            &state.backend_api_key,
            &state.callback_url,
        )
    }
}
