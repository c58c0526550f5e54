use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use oauth2::{basic::BasicErrorResponseType, RequestTokenError, StandardErrorResponse};
use thiserror::Error;

/// Failures of the account linking flow.
///
/// Every backend failure inside the linker and the callback is converted to one of these at
/// the component boundary, so transport errors never reach users raw. None of them are
/// retried automatically; the user starts a new attempt instead.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The backend could not issue an authorization URL.
    ///
    /// Reported to the Discord user as a generic failure. Safe to retry.
    #[error("Failed to generate account link: {0}")]
    LinkGeneration(String),

    /// The authorization provider returned an `error` on the callback.
    ///
    /// Carries the provider's error text. Terminal for that attempt.
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    /// The callback arrived without an authorization code.
    #[error("Missing authorization code")]
    MissingCode,

    /// The callback arrived without the state that identifies the Discord user.
    #[error("Missing state")]
    MissingState,

    /// The callback state does not look like a Discord identity.
    ///
    /// The state is untrusted input, so anything outside the expected shape is rejected
    /// before it can become a session key.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The authorization code exchange was rejected or returned no usable session.
    ///
    /// Covers invalid, expired and replayed codes as well as network failures reaching the
    /// token endpoint. The user must restart the login.
    #[error("Code exchange failed: {0}")]
    ExchangeFailed(String),
}

/// Converts a failed token request into an exchange failure.
///
/// Server responses keep the provider's error code and description; transport and parse
/// failures keep their display text.
impl<RE> From<RequestTokenError<RE, StandardErrorResponse<BasicErrorResponseType>>> for AuthError
where
    RE: std::error::Error + 'static,
{
    fn from(err: RequestTokenError<RE, StandardErrorResponse<BasicErrorResponseType>>) -> Self {
        match err {
            RequestTokenError::ServerResponse(response) => {
                AuthError::ExchangeFailed(response.to_string())
            }
            other => AuthError::ExchangeFailed(other.to_string()),
        }
    }
}

/// Converts linking errors into HTTP responses.
///
/// The browser that followed the backend's redirect shows callback failures as plain text.
///
/// # Returns
/// - 400 Bad Request - For every callback failure, body is the error detail
/// - 500 Internal Server Error - For `LinkGeneration`, which is never raised by an endpoint
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::LinkGeneration(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
                    .into_response()
            }
            err => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
        }
    }
}
