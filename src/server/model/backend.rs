//! Payloads exchanged with the remote backend.

use oauth2::{
    basic::BasicTokenType, ExtraTokenFields, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use serde::{Deserialize, Serialize};

/// Backend account as embedded in token responses and returned by the current-user endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendUser {
    /// Backend subject identifier.
    pub id: String,
    /// Email address on the account, when the provider shared one.
    #[serde(default)]
    pub email: Option<String>,
}

/// Non-standard fields the backend adds to its OAuth2 token response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendTokenFields {
    /// The account the session was issued for.
    #[serde(default)]
    pub user: Option<BackendUser>,
}

impl ExtraTokenFields for BackendTokenFields {}

/// Token endpoint response.
pub type BackendTokenResponse = StandardTokenResponse<BackendTokenFields, BasicTokenType>;

/// Introspection response, required by the OAuth2 client type but never requested.
pub type BackendIntrospectionResponse =
    StandardTokenIntrospectionResponse<BackendTokenFields, BasicTokenType>;
