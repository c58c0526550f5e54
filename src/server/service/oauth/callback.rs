//! Authorization code exchange.
//!
//! Runs the OAuth2 authorization code grant against the backend token endpoint and turns
//! the response into a credential bundle. Storing the bundle is left to the caller.

use chrono::Utc;
use oauth2::AuthorizationCode;

use crate::server::{
    error::auth::AuthError, model::credential::CredentialBundle,
    service::oauth::BackendAuthService,
};

impl<'a> BackendAuthService<'a> {
    /// Exchanges an authorization code for a credential bundle.
    ///
    /// Codes are single-use at the backend, so replaying one fails here rather than
    /// producing a second session.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the OAuth callback
    ///
    /// # Returns
    /// - `Ok(CredentialBundle)` - Session issued by the backend
    /// - `Err(AuthError::ExchangeFailed)` - Code rejected, backend unreachable, or the
    ///   response lacked a usable session
    pub async fn exchange_code(
        &self,
        authorization_code: String,
    ) -> Result<CredentialBundle, AuthError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await?;

        CredentialBundle::from_token_response(&token, Utc::now())
    }
}
