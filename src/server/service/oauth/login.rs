//! Authorization URL issuance.
//!
//! The backend's authorize endpoint answers with a redirect to Discord rather than a JSON
//! body, so the HTTP client runs with redirects disabled and the link is read from the
//! `Location` header.

use reqwest::{header::LOCATION, StatusCode};
use url::Url;

use crate::server::{
    config::{API_KEY_HEADER, AUTHORIZE_PATH, DISCORD_PROVIDER},
    error::auth::AuthError,
    service::oauth::BackendAuthService,
    util::endpoint::backend_endpoint,
};

impl<'a> BackendAuthService<'a> {
    /// Requests an authorization URL that links `identity` to a backend account.
    ///
    /// Asks the backend's authorize endpoint to start a Discord-provider login that returns
    /// to the configured callback. The endpoint answers with a redirect; the redirect target
    /// is the URL the user has to open. `identity` is passed as `state` and comes back
    /// unmodified on the callback. Nothing is stored locally, so calling this again simply
    /// yields a fresh URL.
    ///
    /// # Arguments
    /// - `identity` - Discord user ID requesting the link
    ///
    /// # Returns
    /// - `Ok(Url)` - Authorization URL to present to the user
    /// - `Err(AuthError::LinkGeneration)` - Backend unreachable or answered without a URL
    pub async fn link_url(&self, identity: &str) -> Result<Url, AuthError> {
        let endpoint = backend_endpoint(self.backend_url, AUTHORIZE_PATH)
            .map_err(|e| AuthError::LinkGeneration(e.to_string()))?;

        let response = self
            .http_client
            .get(endpoint)
            .header(API_KEY_HEADER, self.api_key)
            .query(&[
                ("provider", DISCORD_PROVIDER),
                ("redirect_to", self.callback_url),
                ("state", identity),
            ])
            .send()
            .await
            .map_err(|e| AuthError::LinkGeneration(e.to_string()))?;

        let status = response.status();
        if !matches!(
            status,
            StatusCode::FOUND | StatusCode::SEE_OTHER | StatusCode::TEMPORARY_REDIRECT
        ) {
            return Err(AuthError::LinkGeneration(format!(
                "Backend answered {} instead of a redirect",
                status
            )));
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                AuthError::LinkGeneration("Backend redirect has no location".to_string())
            })?;

        let url = Url::parse(location).map_err(|e| AuthError::LinkGeneration(e.to_string()))?;

        tracing::debug!("Issued account link for Discord user {}", identity);

        Ok(url)
    }
}
