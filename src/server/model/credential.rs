//! Credential bundle domain model.
//!
//! A credential bundle is one authorized backend session for one Discord user. It is built
//! from a successful code exchange, owned by the session cache, and replaced wholesale when
//! the user links again.

use chrono::{DateTime, Utc};
use oauth2::{AccessToken, RefreshToken, TokenResponse};

use crate::server::{error::auth::AuthError, model::backend::BackendTokenResponse};

/// Access and refresh tokens plus expiry and the backend subject they belong to.
///
/// Token fields use the `oauth2` secret wrappers, so `Debug` output never contains them.
#[derive(Debug, Clone)]
pub struct CredentialBundle {
    /// Bearer credential for backend requests.
    pub access_token: AccessToken,
    /// Stored alongside the access token; expired sessions are discarded rather than
    /// refreshed.
    pub refresh_token: RefreshToken,
    /// Absolute expiry with millisecond precision.
    pub expires_at: DateTime<Utc>,
    /// Backend subject identifier of the linked account.
    pub subject_id: String,
}

impl CredentialBundle {
    /// Converts a token endpoint response into a credential bundle.
    ///
    /// A response that parsed as OAuth2 can still be unusable: the backend must return a
    /// non-empty access token, a refresh token, a positive lifetime and the account it
    /// issued the session for. Anything less is treated as an inconsistent exchange.
    ///
    /// # Arguments
    /// - `token` - Response from the backend token endpoint
    /// - `now` - Time the exchange completed, expiry is computed from it
    ///
    /// # Returns
    /// - `Ok(CredentialBundle)` - Bundle expiring `expires_in` seconds after `now`
    /// - `Err(AuthError::ExchangeFailed)` - A required field is missing or empty
    pub fn from_token_response(
        token: &BackendTokenResponse,
        now: DateTime<Utc>,
    ) -> Result<Self, AuthError> {
        let access_token = token.access_token();
        if access_token.secret().is_empty() {
            return Err(AuthError::ExchangeFailed(
                "Backend returned an empty session".to_string(),
            ));
        }

        let refresh_token = token
            .refresh_token()
            .filter(|refresh| !refresh.secret().is_empty())
            .ok_or_else(|| {
                AuthError::ExchangeFailed("Backend session has no refresh token".to_string())
            })?;

        let expires_in = token
            .expires_in()
            .filter(|lifetime| !lifetime.is_zero())
            .ok_or_else(|| {
                AuthError::ExchangeFailed("Backend session has no expiry".to_string())
            })?;

        let subject_id = token
            .extra_fields()
            .user
            .as_ref()
            .map(|user| user.id.clone())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AuthError::ExchangeFailed("Backend session has no user".to_string())
            })?;

        let expires_at = i64::try_from(expires_in.as_millis())
            .ok()
            .and_then(|millis| now.timestamp_millis().checked_add(millis))
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| {
                AuthError::ExchangeFailed(format!(
                    "Backend session lifetime of {}s is out of range",
                    expires_in.as_secs()
                ))
            })?;

        Ok(Self {
            access_token: access_token.clone(),
            refresh_token: refresh_token.clone(),
            expires_at,
            subject_id,
        })
    }

    /// Whether the bundle is past its expiry at `now`.
    ///
    /// A bundle is still valid at the exact instant of expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
