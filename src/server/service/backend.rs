//! Request-scoped backend access for linked Discord users.
//!
//! Commands that read a user's data from the backend ask `ScopedClientFactory` for a client.
//! The factory consults the session cache on every call and builds a fresh `BackendClient`
//! around the current access token, so a client never outlives the session it was built
//! from. There is no token refresh: an expired session means the user links again.

use oauth2::AccessToken;
use serde::de::DeserializeOwned;
use url::Url;

use crate::server::{
    config::{API_KEY_HEADER, USER_PATH},
    error::{internal::InternalError, AppError},
    model::backend::BackendUser,
    service::session::SessionStore,
    state::AppState,
    util::endpoint::backend_endpoint,
};

/// Builds authenticated backend clients for linked Discord users.
pub struct ScopedClientFactory<'a> {
    http_client: &'a reqwest::Client,
    session_store: &'a SessionStore,
    backend_url: &'a Url,
    api_key: &'a str,
}

impl<'a> ScopedClientFactory<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        session_store: &'a SessionStore,
        backend_url: &'a Url,
        api_key: &'a str,
    ) -> Self {
        Self {
            http_client,
            session_store,
            backend_url,
            api_key,
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(
            &state.http_client,
            &state.session_store,
            &state.backend_url,
            &state.backend_api_key,
        )
    }

    /// Builds a client authenticated as `identity`'s linked backend account.
    ///
    /// Absence is a normal outcome rather than an error: callers should ask the user to
    /// link (or re-link) their account.
    ///
    /// # Arguments
    /// - `identity` - Discord user ID
    ///
    /// # Returns
    /// - `Some(BackendClient)` - Fresh client carrying the session's access token
    /// - `None` - User never linked, unlinked, or the session expired
    pub async fn get(&self, identity: &str) -> Option<BackendClient> {
        let bundle = self.session_store.get(identity).await?;

        Some(BackendClient {
            http_client: self.http_client.clone(),
            backend_url: self.backend_url.clone(),
            api_key: self.api_key.to_string(),
            access_token: bundle.access_token,
            subject_id: bundle.subject_id,
        })
    }
}

/// Backend client scoped to one linked user, meant for a single command invocation.
pub struct BackendClient {
    /// Shared connection pool; clones are cheap.
    http_client: reqwest::Client,
    backend_url: Url,
    api_key: String,
    access_token: AccessToken,
    subject_id: String,
}

impl BackendClient {
    /// Backend subject identifier of the linked account.
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Sends an authenticated `GET` to a backend path and decodes the JSON body.
    ///
    /// # Arguments
    /// - `path` - Endpoint path starting with `/`
    ///
    /// # Returns
    /// - `Ok(T)` - Decoded response body
    /// - `Err(AppError::ReqwestErr)` - Request failed, non-success status, or invalid body
    /// - `Err(AppError::InternalErr(InvalidEndpoint))` - Path produced an invalid URL
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let endpoint =
            backend_endpoint(&self.backend_url, path).map_err(|e| InternalError::InvalidEndpoint {
                path: path.to_string(),
                source: e,
            })?;

        let body = self
            .http_client
            .get(endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .bearer_auth(self.access_token.secret())
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(body)
    }

    /// Retrieves the backend account this client is authenticated as.
    pub async fn current_user(&self) -> Result<BackendUser, AppError> {
        self.get_json(USER_PATH).await
    }
}
