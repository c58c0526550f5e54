//! OAuth callback endpoint.
//!
//! Completes account linking once the backend redirects the user's browser back. The
//! handler only validates and orchestrates; the exchange lives in `service::oauth` and the
//! storage in `service::session`.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::server::{
    error::{auth::AuthError, AppError},
    service::oauth::BackendAuthService,
    state::AppState,
    util::parse::parse_identity,
};

/// Query parameters for the OAuth callback endpoint.
///
/// Every field is optional at the extractor level so a malformed callback produces a
/// specific error instead of a generic rejection.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// Authorization code to exchange for a backend session.
    pub code: Option<String>,
    /// Discord user ID embedded when the link was issued.
    pub state: Option<String>,
    /// Error code from the authorization provider, e.g. `access_denied`.
    pub error: Option<String>,
    /// Human readable detail accompanying `error`.
    pub error_description: Option<String>,
}

/// GET /api/auth/callback - Complete linking a Discord user to a backend account
///
/// Terminates the authorization round trip started by the `/link` command. The `state`
/// query value is the only binding between the Discord user and the session being
/// created; no other verification of the caller's identity takes place.
///
/// # Query Parameters
/// - `code`: Authorization code issued by the backend
/// - `state`: Discord user ID the link was issued for
/// - `error` / `error_description`: Set by the provider when authorization failed
///
/// # Returns
/// - `302 Found`: Session stored, redirect to the configured success page
/// - `400 Bad Request`: Plain-text detail for a denied, malformed, or unexchangeable callback
/// - `500 Internal Server Error`: Unexpected failure
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(e) = link_account(&state, params).await {
        tracing::warn!("Rejected OAuth callback: {}", e);
        return Err(e.into());
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, state.link_success_url.to_string())],
    ))
}

/// Validates the callback, exchanges the code and stores the resulting session.
///
/// Writes to the session store exactly once, and only after every check and the exchange
/// have succeeded.
async fn link_account(state: &AppState, params: CallbackParams) -> Result<(), AuthError> {
    if let Some(error) = params.error {
        let detail = match params.error_description {
            Some(description) if !description.is_empty() => format!("{}: {}", error, description),
            _ => error,
        };
        return Err(AuthError::AuthorizationDenied(detail));
    }

    let code = params
        .code
        .filter(|code| !code.is_empty())
        .ok_or(AuthError::MissingCode)?;

    let identity = parse_identity(params.state.as_deref())?;

    let auth_service = BackendAuthService::from_state(state);
    let bundle = auth_service.exchange_code(code).await?;

    tracing::info!(
        "Linked Discord user {} to backend account {}",
        identity,
        bundle.subject_id
    );

    state.session_store.put(identity, bundle).await;

    Ok(())
}
