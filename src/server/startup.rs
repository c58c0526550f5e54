use oauth2::{Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::server::{
    config::{Config, TOKEN_PATH},
    error::{config::ConfigError, internal::InternalError, AppError},
    service::session::SessionStore,
    state::{AppState, OAuth2Client},
    util::endpoint::backend_endpoint,
};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG`, defaulting to `info` when it is unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client used for every backend request.
///
/// Redirects are disabled: the link flow reads the backend's authorize redirect instead of
/// following it, and the token exchange must never be redirected to another host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::InternalErr(HttpClientBuild))` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(InternalError::HttpClientBuild)?;

    Ok(client)
}

/// Builds the OAuth2 client for the backend token endpoint.
///
/// The backend API key and secret act as the OAuth2 client credentials, and the callback
/// URL is sent as `redirect_uri` so the backend can match it against the one it redirected
/// to.
///
/// # Arguments
/// - `config` - Application configuration with backend and callback settings
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with the token endpoint set
/// - `Err(AppError::ConfigErr(InvalidUrl))` - Backend or callback URL is not a valid URL
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let backend_url = parse_url("BACKEND_URL", &config.backend_url)?;
    let token_url =
        backend_endpoint(&backend_url, TOKEN_PATH).map_err(|e| ConfigError::InvalidUrl {
            name: "BACKEND_URL".to_string(),
            source: e,
        })?;
    let callback_url = parse_url("CALLBACK_URL", &config.callback_url)?;

    let client: OAuth2Client = Client::new(ClientId::new(config.backend_api_key.clone()))
        .set_client_secret(ClientSecret::new(config.backend_api_secret.clone()))
        .set_token_uri(TokenUrl::from_url(token_url))
        .set_redirect_uri(RedirectUrl::from_url(callback_url));

    Ok(client)
}

/// Builds the application state from a loaded configuration.
///
/// Every configured URL is parsed here, so a malformed value stops startup instead of
/// surfacing on the first callback.
///
/// # Returns
/// - `Ok(AppState)` - State with fresh clients and an empty session store
/// - `Err(AppError::ConfigErr(InvalidUrl))` - A configured URL does not parse
/// - `Err(AppError::InternalErr(HttpClientBuild))` - HTTP client failed to initialize
pub fn setup_state(config: &Config) -> Result<AppState, AppError> {
    let http_client = setup_reqwest_client()?;
    let oauth_client = setup_oauth_client(config)?;
    let backend_url = parse_url("BACKEND_URL", &config.backend_url)?;
    let link_success_url = parse_url("LINK_SUCCESS_URL", &config.link_success_url)?;

    Ok(AppState::new(
        http_client,
        oauth_client,
        SessionStore::new(),
        backend_url,
        config.backend_api_key.clone(),
        config.callback_url.clone(),
        link_success_url,
    ))
}

/// Parses a configured URL, naming the variable it came from on failure.
pub fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name: name.to_string(),
        source: e,
    })
}
