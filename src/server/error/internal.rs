use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A backend endpoint URL could not be built from the configured base URL.
    ///
    /// The base URL is validated at startup, so this points at a malformed endpoint path.
    #[error("Failed to build backend endpoint '{path}': {source}")]
    InvalidEndpoint {
        /// The endpoint path being appended
        path: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),
}
