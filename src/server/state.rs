//! Application state shared across request handlers and bot commands.
//!
//! This module defines the `AppState` struct which holds all shared resources needed by the
//! callback endpoint and the Discord bot. The state is initialized once during startup and
//! then cloned into the Axum router and the bot's event handler.
//!
//! The state includes:
//! - HTTP client for backend requests
//! - OAuth2 client for the backend token endpoint
//! - Session cache of linked credential bundles
//! - Backend and callback URLs

use oauth2::basic::BasicErrorResponseType;
use oauth2::{
    Client, EndpointNotSet, EndpointSet, RevocationErrorResponseType, StandardErrorResponse,
    StandardRevocableToken,
};
use url::Url;

use crate::server::{
    model::backend::{BackendIntrospectionResponse, BackendTokenResponse},
    service::session::SessionStore,
};

/// Type alias for the OAuth2 client configured for the backend token endpoint.
///
/// Only the token endpoint is set: authorization URLs are issued by the backend itself.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    BackendTokenResponse,
    BackendIntrospectionResponse,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `SessionStore` shares its map through an `Arc`
#[derive(Clone)]
pub struct AppState {
    /// HTTP client for backend requests.
    ///
    /// Configured with redirects disabled, which lets the link flow read the backend's
    /// authorize redirect and keeps the token exchange from following redirects.
    pub http_client: reqwest::Client,

    /// OAuth2 client for exchanging authorization codes at the backend.
    pub oauth_client: OAuth2Client,

    /// Linked sessions keyed by Discord user ID.
    ///
    /// Written by the OAuth callback, read by the scoped client factory.
    pub session_store: SessionStore,

    /// Backend base URL.
    pub backend_url: Url,

    /// Backend API key sent as the `apikey` header.
    pub backend_api_key: String,

    /// Public callback URL the backend redirects to after authorization.
    pub callback_url: String,

    /// Destination of the redirect sent after a successful link.
    pub link_success_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during startup after configuration has been validated.
    pub fn new(
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        session_store: SessionStore,
        backend_url: Url,
        backend_api_key: String,
        callback_url: String,
        link_success_url: Url,
    ) -> Self {
        Self {
            http_client,
            oauth_client,
            session_store,
            backend_url,
            backend_api_key,
            callback_url,
            link_success_url,
        }
    }

    /// Application state pointing at a mock backend, with an empty session store.
    #[cfg(test)]
    pub fn for_test(backend_url: &str) -> Self {
        use crate::server::{config::Config, startup};

        startup::setup_state(&Config::for_backend(backend_url)).unwrap()
    }
}
